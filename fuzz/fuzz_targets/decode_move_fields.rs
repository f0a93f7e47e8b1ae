#![no_main]
use libfuzzer_sys::fuzz_target;
use piece_codec::chess::core::{PieceKind, FIELD_WIDTH};
use pretty_assertions::assert_eq;

fuzz_target!(|input: (u32, u8)| {
    let (packed, shift) = input;
    let shift = u32::from(shift) % (u32::BITS - FIELD_WIDTH + 1);
    if let Ok(kind) = PieceKind::decode_field(packed, shift) {
        let field = PieceKind::encode_field(kind, shift);
        assert_eq!(packed & (0b111 << shift), field);
    }
});
