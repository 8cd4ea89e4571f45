// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keyboard scan code strings for ANSI.SYS key redefinition (`ESC [ code ; string p`,
//! see [`KeyRedefinition`]).
//!
//! Each [`MappableKey`] row gives the code string for the bare key and for the key with
//! Shift, Ctrl, or Alt (called Option here) held. An empty string means there is no code
//! for that combination. Codes starting with `0;` or `224;` are extended codes; the
//! others are plain ASCII values. Some values are not valid on all keyboards.
//!
//! [`KeyRedefinition`]: crate::KeyRedefinition

use strum_macros::{EnumCount, EnumIter};

/// Which modifier is held with a [`MappableKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum KeyModifier {
    #[default]
    None,
    Shift,
    Control,
    /// Alt.
    Option,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MappableKey {
    pub name: &'static str,
    pub code: &'static str,
    pub shift: &'static str,
    pub control: &'static str,
    pub option: &'static str,
}

impl MappableKey {
    #[must_use]
    pub const fn new(
        name: &'static str,
        code: &'static str,
        shift: &'static str,
        control: &'static str,
        option: &'static str,
    ) -> Self {
        Self {
            name,
            code,
            shift,
            control,
            option,
        }
    }

    /// The code string for this key with `modifier` held, or [`None`] if the table has
    /// no code for that combination.
    #[must_use]
    pub const fn code_for(&self, modifier: KeyModifier) -> Option<&'static str> {
        let code = match modifier {
            KeyModifier::None => self.code,
            KeyModifier::Shift => self.shift,
            KeyModifier::Control => self.control,
            KeyModifier::Option => self.option,
        };
        if code.is_empty() { None } else { Some(code) }
    }
}

pub const KEYBOARD_TABLE_LEN: usize = 85;

/// Names are kept exactly as they appear in the ANSI.SYS documentation tables this data
/// comes from, including `SQUAREBRACKER_R` and `EMPTY` (the backslash key).
#[rustfmt::skip]
pub const KEYBOARD_TABLE: [MappableKey; KEYBOARD_TABLE_LEN] = [
    MappableKey::new("F1",              "0;59",   "0;84",   "0;94",    "0;104"),
    MappableKey::new("F2",              "0;60",   "0;85",   "0;95",    "0;105"),
    MappableKey::new("F3",              "0;61",   "0;86",   "0;96",    "0;106"),
    MappableKey::new("F4",              "0;62",   "0;87",   "0;97",    "0;107"),
    MappableKey::new("F5",              "0;63",   "0;88",   "0;98",    "0;108"),
    MappableKey::new("F6",              "0;64",   "0;89",   "0;99",    "0;109"),
    MappableKey::new("F7",              "0;65",   "0;90",   "0;100",   "0;110"),
    MappableKey::new("F8",              "0;66",   "0;91",   "0;101",   "0;111"),
    MappableKey::new("F9",              "0;67",   "0;92",   "0;102",   "0;112"),
    MappableKey::new("F10",             "0;68",   "0;93",   "0;103",   "0;113"),
    MappableKey::new("F11",             "0;133",  "0;135",  "0;137",   "0;139"),
    MappableKey::new("F12",             "0;134",  "0;136",  "0;138",   "0;140"),
    MappableKey::new("HOME_NUM",        "0;71",   "55",     "0;119",   ""),
    MappableKey::new("UP_ARROW_NUM",    "0;72",   "56",     "0;141",   ""),
    MappableKey::new("PAGE_UP_NUM",     "0;73",   "57",     "0;132",   ""),
    MappableKey::new("LEFT_ARROW_NUM",  "0;75",   "52",     "0;115",   ""),
    MappableKey::new("RIGHT_ARROW_NUM", "0;77",   "54",     "0;116",   ""),
    MappableKey::new("END_NUM",         "0;79",   "49",     "0;117",   ""),
    MappableKey::new("DOWN_ARROW_NUM",  "0;80",   "50",     "0;145",   ""),
    MappableKey::new("PAGE_DOWN_NUM",   "0;81",   "51",     "0;118",   ""),
    MappableKey::new("INSERT_NUM",      "0;82",   "48",     "0;146",   ""),
    MappableKey::new("DELETE_NUM",      "0;83",   "46",     "0;147",   ""),
    MappableKey::new("HOME",            "224;71", "224;71", "224;119", "224;151"),
    MappableKey::new("UP_ARROW",        "224;72", "224;72", "224;141", "224;152"),
    MappableKey::new("PAGE_UP",         "224;73", "224;73", "224;132", "224;153"),
    MappableKey::new("LEFT_ARROW",      "224;75", "224;75", "224;115", "224;155"),
    MappableKey::new("RIGHT_ARROW",     "224;77", "224;77", "224;116", "224;157"),
    MappableKey::new("END",             "224;79", "224;79", "224;117", "224;159"),
    MappableKey::new("DOWN_ARROW",      "224;80", "224;80", "224;145", "224;154"),
    MappableKey::new("PAGE_DOWN",       "224;81", "224;81", "224;118", "224;161"),
    MappableKey::new("INSERT",          "224;82", "224;82", "224;146", "224;162"),
    MappableKey::new("DELETE",          "224;83", "224;83", "224;147", "224;163"),
    MappableKey::new("PRINT_SCREEN",    "",       "",       "0;114",   ""),
    MappableKey::new("PAUSE_BREAK",     "",       "",       "0;0",     ""),
    MappableKey::new("BACKSPACE",       "8",      "8",      "127",     "0"),
    MappableKey::new("ENTER",           "13",     "",       "10",      "0"),
    MappableKey::new("TAB",             "9",      "0;15",   "0;148",   "0;165"),
    MappableKey::new("NULL",            "0;3",    "",       "",        ""),
    MappableKey::new("A",               "97",     "65",     "1",       "0;30"),
    MappableKey::new("B",               "98",     "66",     "2",       "0;48"),
    MappableKey::new("C",               "99",     "67",     "3",       "0;46"),
    MappableKey::new("D",               "100",    "68",     "4",       "0;32"),
    MappableKey::new("E",               "101",    "69",     "5",       "0;18"),
    MappableKey::new("F",               "102",    "70",     "6",       "0;33"),
    MappableKey::new("G",               "103",    "71",     "7",       "0;34"),
    MappableKey::new("H",               "104",    "72",     "8",       "0;35"),
    MappableKey::new("I",               "105",    "73",     "9",       "0;23"),
    MappableKey::new("J",               "106",    "74",     "10",      "0;36"),
    MappableKey::new("K",               "107",    "75",     "11",      "0;37"),
    MappableKey::new("L",               "108",    "76",     "12",      "0;38"),
    MappableKey::new("M",               "109",    "77",     "13",      "0;50"),
    MappableKey::new("N",               "110",    "78",     "14",      "0;49"),
    MappableKey::new("O",               "111",    "79",     "15",      "0;24"),
    MappableKey::new("P",               "112",    "80",     "16",      "0;25"),
    MappableKey::new("Q",               "113",    "81",     "17",      "0;16"),
    MappableKey::new("R",               "114",    "82",     "18",      "0;19"),
    MappableKey::new("S",               "115",    "83",     "19",      "0;31"),
    MappableKey::new("T",               "116",    "84",     "20",      "0;20"),
    MappableKey::new("U",               "117",    "85",     "21",      "0;22"),
    MappableKey::new("V",               "118",    "86",     "22",      "0;47"),
    MappableKey::new("W",               "119",    "87",     "23",      "0;17"),
    MappableKey::new("X",               "120",    "88",     "24",      "0;45"),
    MappableKey::new("Y",               "121",    "89",     "25",      "0;21"),
    MappableKey::new("Z",               "122",    "90",     "26",      "0;44"),
    MappableKey::new("1",               "49",     "33",     "",        "0;120"),
    MappableKey::new("2",               "50",     "64",     "0",       "0;121"),
    MappableKey::new("3",               "51",     "35",     "",        "0;122"),
    MappableKey::new("4",               "52",     "36",     "",        "0;123"),
    MappableKey::new("5",               "53",     "37",     "",        "0;124"),
    MappableKey::new("6",               "54",     "94",     "30",      "0;125"),
    MappableKey::new("7",               "55",     "38",     "",        "0;126"),
    MappableKey::new("8",               "56",     "42",     "",        "0;126"),
    MappableKey::new("9",               "57",     "40",     "",        "0;127"),
    MappableKey::new("0",               "48",     "41",     "",        "0;129"),
    MappableKey::new("DASH",            "45",     "95",     "31",      "0;130"),
    MappableKey::new("EQUAL",           "61",     "43",     "",        "0;131"),
    MappableKey::new("SQUAREBRACKET_L", "91",     "123",    "27",      "0;126"),
    MappableKey::new("SQUAREBRACKER_R", "93",     "125",    "29",      "0;27"),
    MappableKey::new("EMPTY",           "92",     "124",    "28",      "0;43"),
    MappableKey::new("SEMICOLON",       "59",     "58",     "",        "0;39"),
    MappableKey::new("APOSTROPHE",      "39",     "34",     "",        "0;40"),
    MappableKey::new("COMMA",           "44",     "60",     "",        "0;51"),
    MappableKey::new("PERIOD",          "46",     "62",     "",        "0;52"),
    MappableKey::new("FORWARD_SLASH",   "47",     "63",     "",        "0;53"),
    MappableKey::new("BACKTICK",        "96",     "126",    "",        "0;41"),
];

/// Look up a key by its exact (case sensitive) name.
#[must_use]
pub fn find_key(name: &str) -> Option<&'static MappableKey> {
    KEYBOARD_TABLE.iter().find(|key| key.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = KEYBOARD_TABLE.iter().map(|key| key.name).collect();
        assert_eq!(names.len(), KEYBOARD_TABLE_LEN);
    }

    #[test_case("F1", "0;59", "0;84", "0;94", "0;104")]
    #[test_case("F12", "0;134", "0;136", "0;138", "0;140")]
    #[test_case("HOME", "224;71", "224;71", "224;119", "224;151")]
    #[test_case("A", "97", "65", "1", "0;30")]
    #[test_case("BACKTICK", "96", "126", "", "0;41")]
    fn lookup(name: &str, code: &str, shift: &str, control: &str, option: &str) {
        let key = find_key(name).unwrap();
        assert_eq!(key.code, code);
        assert_eq!(key.shift, shift);
        assert_eq!(key.control, control);
        assert_eq!(key.option, option);
    }

    #[test]
    fn legacy_names_are_kept() {
        assert!(find_key("SQUAREBRACKER_R").is_some());
        assert_eq!(find_key("EMPTY").unwrap().code, "92");
        assert!(find_key("SQUAREBRACKET_R").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(find_key("f1").is_none());
        assert!(find_key("").is_none());
    }

    #[test]
    fn empty_string_means_no_code() {
        let print_screen = find_key("PRINT_SCREEN").unwrap();
        assert_eq!(print_screen.code_for(KeyModifier::None), None);
        assert_eq!(print_screen.code_for(KeyModifier::Shift), None);
        assert_eq!(print_screen.code_for(KeyModifier::Control), Some("0;114"));
        assert_eq!(print_screen.code_for(KeyModifier::Option), None);
    }

    #[test]
    fn code_for_matches_fields() {
        for key in &KEYBOARD_TABLE {
            for modifier in KeyModifier::iter() {
                let field = match modifier {
                    KeyModifier::None => key.code,
                    KeyModifier::Shift => key.shift,
                    KeyModifier::Control => key.control,
                    KeyModifier::Option => key.option,
                };
                assert_eq!(key.code_for(modifier).unwrap_or(""), field);
            }
        }
    }

    #[test]
    fn every_key_has_at_least_one_code() {
        for key in &KEYBOARD_TABLE {
            let any = KeyModifier::iter().any(|modifier| key.code_for(modifier).is_some());
            assert!(any, "{} has no codes", key.name);
        }
    }
}
