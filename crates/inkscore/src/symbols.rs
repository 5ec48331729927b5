//! The drill's symbol set
//!
//! Thirty common simplified characters, from single strokes up to `心`.
//! The scorer accepts any symbol; this list is what rounds are drawn from.

const SYMBOLS: [char; 30] = [
    '一', '二', '三', '四', '五', '六', '七', '八', '九', '十', //
    '人', '口', '日', '月', '水', '火', '木', '金', '土', '山', //
    '大', '小', '中', '上', '下', '左', '右', '天', '地', '心',
];

/// Every symbol, in drill order
pub fn all() -> &'static [char] {
    &SYMBOLS
}

pub fn contains(symbol: char) -> bool {
    SYMBOLS.contains(&symbol)
}

/// Symbol for a round, chosen by the caller's seed
pub fn pick(seed: u64) -> char {
    SYMBOLS[(seed % SYMBOLS.len() as u64) as usize]
}
