pub const DOUBLE_QUOTE: char = '\"';
pub const BACKSLASH: char = '\\';
pub const STAR: char = '*';
pub const DASH: char = '-';
pub const FWDSLASH: char = '/';
pub const UNDERLINE: char = '_';
pub const SINGLE_QUOTE: char = '\'';
pub const DOT: char = '.';
pub const HASH: char = '#';
pub const COLON: char = ':';
pub const PLUS: char = '+';

/// Checks if `c` is a space according to VHDL-2008 LRM p225.
/// Set: space, nbsp
pub fn is_space(c: &char) -> bool {
    c == &'\u{0020}' || c == &'\u{00A0}'
}

/// Checks if `c` is a digit according to VHDL-2008 LRM p225.
pub fn is_digit(c: &char) -> bool {
    match c {
        '0'..='9' => true,
        _ => false,
    }
}

/// Checks if `c` is a graphic character according to VHDL-2008 LRM p230.
/// - rule ::= upper_case_letter | digit | special_character | space_character
/// | lower_case_letter | other_special_character
pub fn is_graphic(c: &char) -> bool {
    is_lower(&c)
        || is_upper(&c)
        || is_digit(&c)
        || is_special(&c)
        || is_other_special(&c)
        || is_space(&c)
}

/// Checks if `c` is an upper-case letter according to VHDL-2019 LRM p257.
/// Set: `ABCDEFGHIJKLMNOPQRSTUVWXYZÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖØÙÚÛÜÝÞ`
pub fn is_upper(c: &char) -> bool {
    match c {
        '\u{00D7}' => false, // reject multiplication sign
        'A'..='Z' | 'À'..='Þ' => true,
        _ => false,
    }
}

/// Checks if `c` is a new-line character.
pub fn is_newline(c: &char) -> bool {
    c == &'\n'
}

/// Checks if `c` is a special character according to VHDL-2008 LRM p225.
/// Set: `"#&'()*+,-./:;<=>?@[]_`|`
pub fn is_special(c: &char) -> bool {
    match c {
        '"' | '#' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | '-' | '.' | '/' | ':' | ';'
        | '<' | '=' | '>' | '?' | '@' | '[' | ']' | '_' | '`' | '|' => true,
        _ => false,
    }
}

/// Checks if `c` is a graphic character according to VHDL-2008 LRM p225 and
/// is NOT a double character ".
///
/// This function is exclusively used in the logic for collecting a bit string literal.
pub fn is_graphic_and_not_double_quote(c: &char) -> bool {
    c != &DOUBLE_QUOTE && is_graphic(&c)
}

/// Checks if `c` is an "other special character" according to VHDL-2008 LRM p225.
/// Set: `!$%\^{} ~¡¢£¤¥¦§ ̈©a«¬® ̄°±23 ́μ¶· ̧1o»1⁄41⁄23⁄4¿×÷-`
pub fn is_other_special(c: &char) -> bool {
    match c {
        '!'
        | '$'
        | '%'
        | '\\'
        | '^'
        | '{'
        | '}'
        | ' '
        | '~'
        | '-'
        | '\u{00A1}'..='\u{00BF}'
        | '\u{00D7}'
        | '\u{00F7}' => true,
        _ => false,
    }
}

/// Checks if `c` is a lower-case letter according to VHDL-2019 LRM p257.
/// Set: `abcdefghijklmnopqrstuvwxyzßàáâãäåæçèéêëìíîïðñòóôõöøùúûüýþÿ`
pub fn is_lower(c: &char) -> bool {
    match c {
        '\u{00F7}' => false, // reject division sign
        'a'..='z' | 'ß'..='ÿ' => true,
        _ => false,
    }
}

/// Checks if `c` is a letter according to VHDL-2019 LRM p257.
pub fn is_letter(c: &char) -> bool {
    is_lower(&c) || is_upper(&c)
}

/// Checks if `c` is a digit | letter according to VHDL-2008 LRM p230.
pub fn is_extended_digit(c: &char) -> bool {
    is_digit(&c) || is_letter(&c)
}

/// Checks if `c` is a digit | letter according to VHDL-2008 LRM p229.
pub fn is_letter_or_digit(c: &char) -> bool {
    is_digit(&c) || is_letter(&c)
}

/// Checks if the character is a separator according to VHDL-2019 LRM p259.
pub fn is_separator(c: &char) -> bool {
    // whitespace: space, nbsp
    c == &'\u{0020}' || c == &'\u{00A0}' ||
    // format-effectors: ht (\t), vt, cr (\r), lf (\n)
    c == &'\u{0009}' || c == &'\u{000B}' || c == &'\u{000D}' || c == &'\u{000A}'
}

/// Checks if `c` begins a line break: `\n`, or `\r` (the `\r\n` pair is
/// collapsed by treating `\n` as the actual break and `\r` as leading
/// whitespace the indentation/space scanner swallows).
pub fn is_linebreak(c: &char) -> bool {
    c == &'\n'
}
