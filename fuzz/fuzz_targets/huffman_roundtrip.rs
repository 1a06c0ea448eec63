#![no_main]
use huffman::HuffmanCodec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    if data.is_empty() {
        return;
    }

    // Mask into the 128-symbol alphabet.
    let input: Vec<u8> = data.iter().map(|&b| b & 0x7F).collect();

    let codec = HuffmanCodec::from_bytes(&input).unwrap();
    let packed = codec.encode(&input).unwrap();
    let decoded = codec.decode(&packed).unwrap();

    assert_eq!(input, decoded);
});
