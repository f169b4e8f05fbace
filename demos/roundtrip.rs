//! Compress a short skewed sequence, decode it again, and show the sizes.
//!
//! Run:
//! `cargo run --example roundtrip`

use vpacker::{bound, compress, raw, uncompress, EncodedBlock};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let src: [u32; 12] = [92, 923, 0, 31, 293, 92, 22, 38, 23, 18, 102, 231];

    // Size the destination before looking at the data.
    let mut dst = vec![0u8; bound(src.len(), 32)];
    let written = compress(&src, &mut dst)?;

    let mut buf = [0u32; 12];
    let read = uncompress(&dst[..written], &mut buf)?;
    if read != written {
        return Err(format!("read {read} bytes, wrote {written}").into());
    }

    for (i, (a, b)) in src.iter().zip(&buf).enumerate() {
        println!("{i} : {a} == {b}?");
    }
    println!(
        "{} values, {} bytes encoded (bound {}, raw {})",
        src.len(),
        written,
        dst.len(),
        src.len() * 4
    );

    // The same through the sentinel interface a foreign binding would call.
    let mut ffi_dst = vec![0u8; raw::compress32_bound(12)];
    let wsize = raw::compress32(&src, &mut ffi_dst, 12);
    if wsize == 0 {
        return Err("raw::compress32 failed".into());
    }
    let rsize = raw::uncompress32(&ffi_dst, &mut buf, 12);
    if rsize != wsize {
        return Err("raw::uncompress32 failed".into());
    }

    // And with width and count kept next to the bytes.
    let block = EncodedBlock::encode(&src);
    assert_eq!(block.as_bytes(), &dst[..written]);
    println!("block: {} x {} in {} bytes", block.count(), block.width(), block.len());

    Ok(())
}
