#![no_main]

use libfuzzer_sys::fuzz_target;

use ctml2yaml::convert::CtmlConverter;
use ctml2yaml::units::normalize_units;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either convert or return an error, never panic
    let _ = CtmlConverter::new().convert_reader(data);

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = normalize_units(text);
    }
});
