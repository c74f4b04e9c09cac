#![no_main]

use libfuzzer_sys::fuzz_target;
use tally_import::core::{ConversionConfig, DocumentKind, SequentialIds};

fuzz_target!(|data: &[u8]| {
    let Some((selector, csv)) = data.split_first() else {
        return;
    };
    let kind = DocumentKind::ALL[*selector as usize % DocumentKind::ALL.len()];
    // Errors are fine, panics are bugs.
    let _ = tally_import::documents::convert(
        kind,
        csv,
        &ConversionConfig::default(),
        &mut SequentialIds::new(),
    );
});
