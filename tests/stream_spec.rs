use binstream::{BinaryStream, ByteBuffer, StreamError};

#[test]
fn typed_reads_round_trip_both_byte_orders() {
    let data = [0x00, 0x00, 0x00, 0x01];
    assert_eq!(BinaryStream::new(&data).read_u32_be().unwrap(), 1);
    assert_eq!(BinaryStream::new(&data).read_u32_le().unwrap(), 16_777_216);

    let data = [0x12, 0x34];
    assert_eq!(BinaryStream::new(&data).read_u16_be().unwrap(), 0x1234);
    assert_eq!(BinaryStream::new(&data).read_u16_le().unwrap(), 0x3412);

    let data = [0x80];
    assert_eq!(BinaryStream::new(&data).read_u8().unwrap(), 0x80);
    assert_eq!(BinaryStream::new(&data).read_i8().unwrap(), -128);

    let data = [0xFF, 0xFE];
    assert_eq!(BinaryStream::new(&data).read_i16_be().unwrap(), -2);
    assert_eq!(BinaryStream::new(&data).read_i16_le().unwrap(), -257);

    let data = [0xFF, 0xFF, 0xFF, 0xFE];
    assert_eq!(BinaryStream::new(&data).read_i32_be().unwrap(), -2);
}

#[test]
fn sixty_four_bit_reads_are_exact_over_the_full_range() {
    let data = [0xFF; 8];
    assert_eq!(BinaryStream::new(&data).read_u64_be().unwrap(), u64::MAX);
    assert_eq!(BinaryStream::new(&data).read_i64_be().unwrap(), -1);
    assert_eq!(BinaryStream::new(&data).read_i64_le().unwrap(), -1);

    // A value above 2^53, the threshold where float-backed representations
    // would start rounding.
    let data = [0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01];
    assert_eq!(
        BinaryStream::new(&data).read_u64_be().unwrap(),
        (1u64 << 53) + 1
    );
}

#[test]
fn float_reads_decode_ieee754_in_both_byte_orders() {
    let be = [0x3F, 0x80, 0x00, 0x00];
    let le = [0x00, 0x00, 0x80, 0x3F];
    assert_eq!(BinaryStream::new(&be).read_f32_be().unwrap(), 1.0);
    assert_eq!(BinaryStream::new(&le).read_f32_le().unwrap(), 1.0);

    let be = [0xBF, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    assert_eq!(BinaryStream::new(&be).read_f64_be().unwrap(), -1.0);
    let mut le = be;
    le.reverse();
    assert_eq!(BinaryStream::new(&le).read_f64_le().unwrap(), -1.0);
}

#[test]
fn short_read_reports_counts_and_leaves_position_unchanged() {
    let data = [0xAA, 0xBB, 0xCC];
    let mut s = BinaryStream::new(&data);
    s.read_u16_be().unwrap();

    assert_eq!(
        s.read_u32_be(),
        Err(StreamError::EndOfStream {
            requested: 4,
            available: 1,
        })
    );
    assert_eq!(s.pos(), 2);

    // The failed read consumed nothing; the remaining byte is still there.
    assert_eq!(s.read_u8().unwrap(), 0xCC);
    assert!(s.is_eof());
}

#[test]
fn seek_clamps_into_bounds() {
    let data = [0u8; 10];
    let mut s = BinaryStream::new(&data);

    s.seek(-5);
    assert_eq!(s.pos(), 0);

    s.seek(s.size() as i64 + 100);
    assert_eq!(s.pos(), s.size());

    s.seek(4);
    assert_eq!(s.pos(), 4);
}

#[test]
fn constructors_converge_on_the_same_state() {
    let mut s = BinaryStream::zeroed(4);
    assert_eq!(s.size(), 4);
    assert_eq!(s.read_u32_be().unwrap(), 0);

    let data = [0x01, 0x02, 0x03, 0x04, 0x05];
    let mut s = BinaryStream::with_offset(&data, 2);
    assert_eq!(s.size(), 3);
    assert_eq!(s.read_u8().unwrap(), 0x03);

    let mut s = BinaryStream::view(&data, 1, 3);
    assert_eq!(s.size(), 3);
    assert_eq!(s.read_bytes(3).unwrap(), &[0x02, 0x03, 0x04]);
    assert!(s.is_eof());
}

#[test]
fn trimmed_buffer_bounds_reads_by_virtual_length() {
    let data = [0x01, 0x02, 0x03, 0x04];
    let mut buf = ByteBuffer::from_slice(&data);
    buf.trim(2);

    let mut s = BinaryStream::from_buffer(buf);
    assert_eq!(s.size(), 2);
    assert_eq!(
        s.read_u32_be(),
        Err(StreamError::EndOfStream {
            requested: 4,
            available: 2,
        })
    );
    assert_eq!(s.read_u16_be().unwrap(), 0x0102);
}

#[test]
fn bit_reads_big_endian_split_equals_one_shot() {
    let data = [0xAC, 0x53];

    let mut split = BinaryStream::new(&data);
    let hi = split.read_bits_be(5).unwrap();
    let lo = split.read_bits_be(6).unwrap();

    let mut whole = BinaryStream::new(&data);
    let v = whole.read_bits_be(11).unwrap();

    assert_eq!(hi, v >> 6);
    assert_eq!(lo, v & 0x3F);
    assert_eq!(v, 0b101_0110_0010);
}

#[test]
fn bit_reads_little_endian_split_equals_one_shot() {
    let data = [0xAC, 0x53];

    let mut split = BinaryStream::new(&data);
    let first = split.read_bits_le(5).unwrap();
    let second = split.read_bits_le(6).unwrap();

    let mut whole = BinaryStream::new(&data);
    let v = whole.read_bits_le(11).unwrap();

    assert_eq!(first, v & 0x1F);
    assert_eq!(second, v >> 5);
    assert_eq!(v, 0b011_1010_1100);
}

#[test]
fn thirty_two_bit_read_yields_all_ones() {
    let data = [0xFF, 0xFF, 0xFF, 0xFF];
    let mut s = BinaryStream::new(&data);
    assert_eq!(s.read_bits_be(32).unwrap(), u32::MAX);

    let mut s = BinaryStream::new(&data);
    assert_eq!(s.read_bits_le(32).unwrap(), u32::MAX);
}

#[test]
fn bit_width_above_32_is_rejected() {
    let data = [0u8; 8];
    let mut s = BinaryStream::new(&data);
    assert_eq!(
        s.read_bits_be(33),
        Err(StreamError::UnsupportedBitWidth { requested: 33 })
    );
    assert_eq!(
        s.read_bits_le(64),
        Err(StreamError::UnsupportedBitWidth { requested: 64 })
    );
    assert_eq!(s.pos(), 0);
}

#[test]
fn failed_bit_refill_preserves_accumulator_and_position() {
    let data = [0xAC];
    let mut s = BinaryStream::new(&data);
    assert_eq!(s.read_bits_be(4).unwrap(), 0b1010);

    // Asking for 12 more bits needs another byte that isn't there.
    assert_eq!(
        s.read_bits_be(12),
        Err(StreamError::EndOfStream {
            requested: 1,
            available: 0,
        })
    );

    // The four buffered bits survived the failure.
    assert_eq!(s.read_bits_be(4).unwrap(), 0b1100);
    assert!(s.is_eof());
}

#[test]
fn eof_requires_an_empty_bit_accumulator() {
    let data = [0xAC];
    let mut s = BinaryStream::new(&data);
    s.read_bits_be(4).unwrap();

    // Position is at the end but four bits are still buffered.
    assert_eq!(s.pos(), s.size());
    assert!(!s.is_eof());

    s.read_bits_be(4).unwrap();
    assert!(s.is_eof());
}

#[test]
fn byte_reads_do_not_clear_buffered_bits() {
    // Switching to byte reads without aligning leaves stale bits buffered;
    // the next bit read consumes them before touching the cursor.
    let data = [0xAC, 0xFF];
    let mut s = BinaryStream::new(&data);
    assert_eq!(s.read_bits_be(4).unwrap(), 0b1010);
    assert_eq!(s.read_u8().unwrap(), 0xFF);
    assert_eq!(s.read_bits_be(4).unwrap(), 0b1100);
}

#[test]
fn align_to_byte_discards_buffered_bits() {
    let data = [0xAC, 0x53];
    let mut s = BinaryStream::new(&data);
    assert_eq!(s.read_bits_be(4).unwrap(), 0b1010);

    s.align_to_byte();
    assert_eq!(s.read_u8().unwrap(), 0x53);

    // Nothing stale left over from before the align.
    assert!(s.is_eof());
}

#[test]
fn read_bytes_is_bounds_checked_and_zero_copy_sized() {
    let data = [0x01, 0x02, 0x03];
    let mut s = BinaryStream::new(&data);
    assert_eq!(s.read_bytes(2).unwrap(), &[0x01, 0x02]);
    assert_eq!(
        s.read_bytes(2),
        Err(StreamError::EndOfStream {
            requested: 2,
            available: 1,
        })
    );
    assert_eq!(s.read_bytes_full().unwrap(), &[0x03]);
    assert!(s.is_eof());
}

#[test]
fn term_excluded_but_consumed_skips_past_terminator() {
    let data = [0x41, 0x42, 0x00, 0x43];
    let mut s = BinaryStream::new(&data);
    let run = s.read_bytes_term(0x00, false, true, false).unwrap();
    assert_eq!(run, &[0x41, 0x42]);
    assert_eq!(s.pos(), 3);
}

#[test]
fn term_include_and_consume_advance_once() {
    // The terminator appears once in the span and the position moves exactly
    // one byte past it: no double skip.
    let data = [0x41, 0x42, 0x00, 0x43];
    let mut s = BinaryStream::new(&data);
    let run = s.read_bytes_term(0x00, true, true, false).unwrap();
    assert_eq!(run, &[0x41, 0x42, 0x00]);
    assert_eq!(s.pos(), 3);
    assert_eq!(s.read_u8().unwrap(), 0x43);
}

#[test]
fn term_included_but_not_consumed_stops_on_terminator() {
    let data = [0x41, 0x42, 0x00, 0x43];
    let mut s = BinaryStream::new(&data);
    let run = s.read_bytes_term(0x00, true, false, false).unwrap();
    assert_eq!(run, &[0x41, 0x42, 0x00]);
    assert_eq!(s.pos(), 2);
}

#[test]
fn missing_terminator_errors_or_drains_per_flag() {
    let data = [0x41, 0x42, 0x43];

    let mut strict = BinaryStream::new(&data);
    assert_eq!(
        strict.read_bytes_term(0x00, false, true, true),
        Err(StreamError::TerminatorNotFound { terminator: 0x00 })
    );
    assert_eq!(strict.pos(), 0);

    let mut lenient = BinaryStream::new(&data);
    let run = lenient.read_bytes_term(0x00, false, true, false).unwrap();
    assert_eq!(run, &[0x41, 0x42, 0x43]);
    assert_eq!(lenient.pos(), lenient.size());
}

#[test]
fn fixed_contents_check_matches_or_restores_position() {
    let data = [0x89, b'P', b'N', b'G', 0x0D];
    let mut s = BinaryStream::new(&data);
    assert_eq!(
        s.ensure_fixed_contents(&[0x89, b'P', b'N', b'G']).unwrap(),
        &[0x89, b'P', b'N', b'G']
    );
    assert_eq!(s.pos(), 4);

    let mut s = BinaryStream::new(&data);
    assert_eq!(
        s.ensure_fixed_contents(&[0x89, b'P', b'N', b'X']),
        Err(StreamError::UnexpectedContents {
            expected: vec![0x89, b'P', b'N', b'X'],
            actual: vec![0x89, b'P', b'N', b'G'],
        })
    );
    assert_eq!(s.pos(), 0);
}
