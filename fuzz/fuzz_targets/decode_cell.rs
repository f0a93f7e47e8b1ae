#![no_main]
use libfuzzer_sys::fuzz_target;
use piece_codec::chess::cell::Cell;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    for &bits in data {
        let Ok(cell) = Cell::try_from(bits) else {
            continue;
        };
        assert_eq!(cell.bits(), bits);
        assert_eq!(Cell::from(cell.piece()), cell);
        assert_eq!(
            cell.is_slider(),
            cell.kind().is_some_and(|kind| kind.is_slider())
        );
    }
});
