use std::io::Cursor;

use pngchunks::png::{ChunkDecoder, ChunkType, DecodeOptions, PNG_SIGNATURE};
use walkdir::WalkDir;

fn drain(bytes: Vec<u8>, print_text: bool) {
  let options = DecodeOptions { print_text };
  if let Ok(decoder) = ChunkDecoder::from_png_stream(Cursor::new(bytes), options) {
    for _ in decoder {
      //
    }
  }
}

#[test]
fn test_ChunkDecoder_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    drain(v, true);
  }
  // even totally random data should never panic the decoder!
  for _ in 0..10 {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend(super::rand_bytes(1024));
    drain(v.clone(), false);
    drain(v, true);
  }
}

#[test]
fn test_ChunkDecoder_from_file() {
  let png = super::png_bytes(&[
    super::chunk(b"IHDR", &[0; 13], 0x1F15_C489),
    super::chunk(b"tEXt", b"Comment\0made by hand", 0),
    super::chunk(b"IDAT", &[0xAA; 4096], 0x0102_0304),
    super::chunk(b"IEND", &[], 0xAE42_6082),
  ]);
  let mut file = tempfile::tempfile().unwrap();
  std::io::Write::write_all(&mut file, &png).unwrap();
  std::io::Seek::rewind(&mut file).unwrap();

  let decoder = ChunkDecoder::from_png_stream(
    std::io::BufReader::new(file),
    DecodeOptions { print_text: true },
  )
  .unwrap();
  let records: Vec<_> = decoder.collect::<Result<_, _>>().unwrap();
  let types: Vec<ChunkType> = records.iter().map(|r| r.chunk_ty()).collect();
  assert_eq!(types, [ChunkType::IHDR, ChunkType::tEXt, ChunkType::IDAT, ChunkType::IEND]);
  assert_eq!(records[1].text().unwrap().to_string(), "Comment: made by hand");
  assert_eq!(records[2].declared_crc(), 0x0102_0304);
  let consumed: u64 = records.iter().map(|r| r.encoded_len()).sum();
  assert_eq!(consumed + 8, png.len() as u64);
}
