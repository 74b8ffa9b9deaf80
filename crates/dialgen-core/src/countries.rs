//! Built-in country table
//!
//! Mobile number shapes for the supported countries, in display order. The
//! table is built once and shared for the lifetime of the process.

use std::sync::OnceLock;

use crate::country::{CountryPhoneFormat, NumberRule};

/// (id, name, dialing code, national length, leading digits, grouping)
type RawCountry = (
    &'static str,
    &'static str,
    &'static str,
    usize,
    &'static [&'static str],
    &'static [usize],
);

const NANP_LEADING: &[&str] = &["2", "3", "4", "5", "6", "7", "8", "9"];

#[rustfmt::skip]
const RAW_COUNTRIES: &[RawCountry] = &[
    ("us", "United States", "+1", 10, NANP_LEADING, &[3, 3, 4]),
    ("cn", "China", "+86", 11, &["13", "14", "15", "17", "18", "19"], &[3, 4, 4]),
    ("hk", "Hong Kong", "+852", 8, &["5", "6", "9"], &[4, 4]),
    ("mo", "Macao", "+853", 8, &["6"], &[4, 4]),
    ("tw", "Taiwan", "+886", 9, &["9"], &[3, 3, 3]),
    ("jp", "Japan", "+81", 10, &["70", "80", "90"], &[2, 4, 4]),
    ("kr", "South Korea", "+82", 10, &["10"], &[2, 4, 4]),
    ("gb", "United Kingdom", "+44", 10, &["7"], &[4, 6]),
    ("ca", "Canada", "+1", 10, &["204", "236", "250", "289", "306", "403", "416", "438", "514", "587", "604", "613", "647", "705", "780", "819", "902", "905"], &[3, 3, 4]),
    ("au", "Australia", "+61", 9, &["4"], &[3, 3, 3]),
    ("nz", "New Zealand", "+64", 9, &["2"], &[2, 3, 4]),
    ("sg", "Singapore", "+65", 8, &["8", "9"], &[4, 4]),
    ("my", "Malaysia", "+60", 9, &["1"], &[2, 3, 4]),
    ("th", "Thailand", "+66", 9, &["6", "8", "9"], &[2, 3, 4]),
    ("vn", "Vietnam", "+84", 9, &["3", "5", "7", "8", "9"], &[2, 3, 4]),
    ("ph", "Philippines", "+63", 10, &["9"], &[3, 3, 4]),
    ("id", "Indonesia", "+62", 11, &["81", "82", "85", "87", "88", "89"], &[3, 4, 4]),
    ("in", "India", "+91", 10, &["6", "7", "8", "9"], &[5, 5]),
    ("pk", "Pakistan", "+92", 10, &["3"], &[3, 7]),
    ("bd", "Bangladesh", "+880", 10, &["13", "14", "15", "16", "17", "18", "19"], &[4, 6]),
    ("lk", "Sri Lanka", "+94", 9, &["7"], &[2, 3, 4]),
    ("np", "Nepal", "+977", 10, &["98"], &[3, 7]),
    ("kh", "Cambodia", "+855", 9, &["1", "6", "7", "8", "9"], &[2, 3, 4]),
    ("de", "Germany", "+49", 11, &["15", "16", "17"], &[4, 7]),
    ("fr", "France", "+33", 9, &["6", "7"], &[1, 2, 2, 2, 2]),
    ("it", "Italy", "+39", 10, &["3"], &[3, 3, 4]),
    ("es", "Spain", "+34", 9, &["6", "7"], &[3, 3, 3]),
    ("pt", "Portugal", "+351", 9, &["91", "92", "93", "96"], &[3, 3, 3]),
    ("nl", "Netherlands", "+31", 9, &["6"], &[1, 8]),
    ("be", "Belgium", "+32", 9, &["4"], &[3, 2, 2, 2]),
    ("ch", "Switzerland", "+41", 9, &["75", "76", "77", "78", "79"], &[2, 3, 2, 2]),
    ("at", "Austria", "+43", 10, &["6"], &[3, 7]),
    ("se", "Sweden", "+46", 9, &["7"], &[2, 3, 2, 2]),
    ("no", "Norway", "+47", 8, &["4", "9"], &[3, 2, 3]),
    ("dk", "Denmark", "+45", 8, &["2", "3", "4", "5", "6", "7"], &[2, 2, 2, 2]),
    ("fi", "Finland", "+358", 9, &["4", "50"], &[2, 3, 4]),
    ("ie", "Ireland", "+353", 9, &["83", "85", "86", "87", "89"], &[2, 3, 4]),
    ("pl", "Poland", "+48", 9, &["5", "6", "7", "8"], &[3, 3, 3]),
    ("cz", "Czechia", "+420", 9, &["6", "7"], &[3, 3, 3]),
    ("gr", "Greece", "+30", 10, &["69"], &[3, 3, 4]),
    ("tr", "Turkey", "+90", 10, &["5"], &[3, 3, 4]),
    ("ru", "Russia", "+7", 10, &["9"], &[3, 3, 4]),
    ("ua", "Ukraine", "+380", 9, &["39", "50", "63", "66", "67", "68", "73", "93", "95", "96", "97", "98", "99"], &[2, 3, 4]),
    ("il", "Israel", "+972", 9, &["5"], &[2, 3, 4]),
    ("ae", "United Arab Emirates", "+971", 9, &["50", "52", "54", "55", "56", "58"], &[2, 3, 4]),
    ("sa", "Saudi Arabia", "+966", 9, &["5"], &[2, 3, 4]),
    ("qa", "Qatar", "+974", 8, &["3", "5", "6", "7"], &[4, 4]),
    ("eg", "Egypt", "+20", 10, &["10", "11", "12", "15"], &[2, 4, 4]),
    ("za", "South Africa", "+27", 9, &["6", "7", "8"], &[2, 3, 4]),
    ("ng", "Nigeria", "+234", 10, &["70", "80", "81", "90", "91"], &[3, 3, 4]),
    ("ke", "Kenya", "+254", 9, &["1", "7"], &[3, 6]),
    ("ma", "Morocco", "+212", 9, &["6", "7"], &[3, 6]),
    ("br", "Brazil", "+55", 11, &["119", "219", "319", "419", "519", "619", "719", "819", "919"], &[2, 5, 4]),
    ("mx", "Mexico", "+52", 10, &["22", "33", "55", "66", "81"], &[2, 4, 4]),
    ("ar", "Argentina", "+54", 11, &["911", "9341", "9351"], &[1, 2, 4, 4]),
    ("cl", "Chile", "+56", 9, &["9"], &[1, 4, 4]),
    ("co", "Colombia", "+57", 10, &["30", "31", "32", "35"], &[3, 3, 4]),
    ("pe", "Peru", "+51", 9, &["9"], &[3, 3, 3]),
    ("ve", "Venezuela", "+58", 10, &["412", "414", "416", "424", "426"], &[3, 3, 4]),
];

/// The built-in country table, in display order.
pub fn builtin() -> &'static [CountryPhoneFormat] {
    static TABLE: OnceLock<Vec<CountryPhoneFormat>> = OnceLock::new();
    TABLE.get_or_init(|| {
        RAW_COUNTRIES
            .iter()
            .map(|&(id, name, dial_code, length, prefixes, groups)| {
                CountryPhoneFormat::new(id, name, dial_code, NumberRule::new(length, prefixes, groups))
            })
            .collect()
    })
}
