use lazy_static::lazy_static;
use std::ops::RangeInclusive;

#[derive(Clone)]
pub struct CharFilter {
    table: [bool; 256],
}

impl CharFilter {
    pub fn new() -> CharFilter {
        CharFilter {
            table: [false; 256],
        }
    }

    pub fn add_char(&mut self, c: u8) -> () {
        self.table[c as usize] = true;
    }

    pub fn add_chars(&mut self, chars: RangeInclusive<u8>) -> () {
        for c in chars {
            self.table[c as usize] = true;
        }
    }

    pub fn has(&self, c: u8) -> bool {
        self.table[c as usize]
    }
}

lazy_static! {
    pub static ref DIGIT: CharFilter = {
        let mut filter = CharFilter::new();
        filter.add_chars(b'0'..=b'9');
        filter
    };

    // Identifiers in the source language are exactly lowercase ASCII runs.
    pub static ref LETTER_LOWER: CharFilter = {
        let mut filter = CharFilter::new();
        filter.add_chars(b'a'..=b'z');
        filter
    };

    pub static ref WHITESPACE: CharFilter = {
        let mut filter = CharFilter::new();
        filter.add_char(b' ');
        filter.add_char(b'\t');
        filter.add_char(b'\n');
        filter.add_char(b'\r');
        filter
    };
}
