//! Keyword pre-normalization applied before searching a catalog.
//!
//! The alignment itself compares symbols exactly, so width variants and dash
//! look-alikes have to be folded beforehand.

/// Full-width forms of U+FF61..=U+FF9F (half-width katakana and punctuation).
const HALFWIDTH_KATAKANA: [char; 63] = [
    '。', '「', '」', '、', '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', 'ー',
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ン', '゛', '゜',
];

/// Normalizes a search keyword:
///
/// * trims surrounding whitespace,
/// * widens half-width katakana (voiced marks stay separate symbols),
/// * narrows full-width Latin letters, digits and the ideographic space,
/// * folds `―` and `‐` into `-` and `Φ` into `φ`.
///
/// ```rust
/// use fuzzy_local_alignment::normalize;
///
/// assert_eq!(normalize::keyword("  ＡＢＣ１２３　ｶﾞ―Φ "), "ABC123 カ゛-φ");
/// ```
pub fn keyword(text: &str) -> String {
    text.trim().chars().map(fold).collect::<String>().trim().to_owned()
}

/// Folds a single scalar value, see [`keyword`].
pub fn fold(c: char) -> char {
    match c {
        '\u{FF61}'..='\u{FF9F}' => HALFWIDTH_KATAKANA[c as usize - 0xFF61],
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => {
            char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
        }
        '\u{3000}' => ' ',
        '―' | '‐' => '-',
        'Φ' => 'φ',
        _ => c,
    }
}
