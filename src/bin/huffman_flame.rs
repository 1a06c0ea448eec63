use huffman::HuffmanCodec;

fn main() {
    let input = (0..10000).map(|i| b'a' + (i % 3) as u8).collect::<Vec<_>>();
    let codec = HuffmanCodec::from_bytes(&input).unwrap();

    for _ in 0..1000 {
        let packed = codec.encode(&input).unwrap();
        let decoded = codec.decode(&packed).unwrap();
        assert_eq!(decoded.len(), input.len());
    }
}
