// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 合约 ABI 编解码
//!
//! 只覆盖本服务用到的类型：`address`、`uint256`（限 u128 范围）和 `string`。

use crate::domain::models::wallet::Address;
use crate::utils::errors::BlockchainError;

/// `balanceOf(address)`
pub const BALANCE_OF: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];
/// `decimals()`
pub const DECIMALS: [u8; 4] = [0x31, 0x3c, 0xe5, 0x67];
/// `createToken(address,string)`
pub const CREATE_TOKEN: [u8; 4] = [0x01, 0x38, 0x28, 0x07];
/// `getTokenDetails(uint256)`
pub const GET_TOKEN_DETAILS: [u8; 4] = [0xc1, 0xe0, 0x37, 0x28];

const WORD: usize = 32;

/// 调用参数
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Address(Address),
    Uint(u128),
    String(String),
}

fn uint_word(value: u128) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

fn address_word(address: &Address) -> Result<[u8; WORD], BlockchainError> {
    let bytes = hex::decode(address.hex()).map_err(|e| BlockchainError::InvalidAddress(e.to_string()))?;
    let mut word = [0u8; WORD];
    word[12..].copy_from_slice(&bytes);
    Ok(word)
}

/// 编码一次合约调用：4字节选择器 + 参数
pub fn encode_call(selector: [u8; 4], args: &[Token]) -> Result<Vec<u8>, BlockchainError> {
    let mut head = Vec::with_capacity(args.len() * WORD);
    let mut tail = Vec::new();
    let head_len = args.len() * WORD;

    for arg in args {
        match arg {
            Token::Address(address) => head.extend_from_slice(&address_word(address)?),
            Token::Uint(value) => head.extend_from_slice(&uint_word(*value)),
            Token::String(text) => {
                head.extend_from_slice(&uint_word((head_len + tail.len()) as u128));
                let bytes = text.as_bytes();
                tail.extend_from_slice(&uint_word(bytes.len() as u128));
                tail.extend_from_slice(bytes);
                let padding = (WORD - bytes.len() % WORD) % WORD;
                tail.extend(std::iter::repeat(0u8).take(padding));
            }
        }
    }

    let mut data = Vec::with_capacity(4 + head.len() + tail.len());
    data.extend_from_slice(&selector);
    data.extend_from_slice(&head);
    data.extend_from_slice(&tail);
    Ok(data)
}

fn word_at(data: &[u8], index: usize) -> Result<&[u8], BlockchainError> {
    let start = index * WORD;
    data.get(start..start + WORD)
        .ok_or_else(|| BlockchainError::Decode(format!("return data too short for word {}", index)))
}

fn word_to_u128(word: &[u8]) -> Result<u128, BlockchainError> {
    if word[..16].iter().any(|b| *b != 0) {
        return Err(BlockchainError::Decode("uint256 value exceeds u128".to_string()));
    }
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&word[16..]);
    Ok(u128::from_be_bytes(bytes))
}

/// 解码第 `index` 个字的 uint256
pub fn decode_uint(data: &[u8], index: usize) -> Result<u128, BlockchainError> {
    word_to_u128(word_at(data, index)?)
}

/// 解码第 `index` 个字的 address
pub fn decode_address(data: &[u8], index: usize) -> Result<Address, BlockchainError> {
    let word = word_at(data, index)?;
    Address::parse(&format!("0x{}", hex::encode(&word[12..])))
}

/// 解码第 `index` 个字所指向的动态 string
pub fn decode_string(data: &[u8], index: usize) -> Result<String, BlockchainError> {
    let offset = usize::try_from(decode_uint(data, index)?)
        .map_err(|_| BlockchainError::Decode("string offset out of range".to_string()))?;
    let start = offset
        .checked_add(WORD)
        .ok_or_else(|| BlockchainError::Decode("string offset out of range".to_string()))?;
    let len_word = data
        .get(offset..start)
        .ok_or_else(|| BlockchainError::Decode("string length out of range".to_string()))?;
    let len = usize::try_from(word_to_u128(len_word)?)
        .map_err(|_| BlockchainError::Decode("string length out of range".to_string()))?;

    let end = start
        .checked_add(len)
        .ok_or_else(|| BlockchainError::Decode("string data out of range".to_string()))?;
    let bytes = data
        .get(start..end)
        .ok_or_else(|| BlockchainError::Decode("string data out of range".to_string()))?;
    String::from_utf8(bytes.to_vec()).map_err(|e| BlockchainError::Decode(e.to_string()))
}
