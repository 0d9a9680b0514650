use super::*;
use crate::cue::{Descriptor, ParseOptions, parse};
use crate::extract::extract;
use crate::msf::RAW_SECTOR_SIZE;

const SECTOR: usize = RAW_SECTOR_SIZE as usize;

const MIXED_MODE: &str = r#"FILE "Game.iso" BINARY
  TRACK 01 MODE2/2352
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    PREGAP 00:02:00
    INDEX 00 00:00:03
    INDEX 01 00:00:04
"#;

fn parsed() -> Descriptor {
    let options = ParseOptions {
        reset_pregap: true,
        type_from_mode: true,
    };
    parse(MIXED_MODE, options).unwrap()
}

#[test]
fn descriptor_layout() {
    let image = vec![0xAAu8; 6 * SECTOR];
    let desc = parsed();
    let tracks = extract(&image, &desc).unwrap();

    let cue = render_descriptor("_Game.bin", &tracks);
    assert_eq!(
        cue,
        "FILE \"_Game.bin\" BINARY\n\
         \x20 TRACK 01 MODE2/2352\n\
         \x20   INDEX 01 00:00:00\n\
         \x20 TRACK 02 AUDIO\n\
         \x20   PREGAP 00:02:00\n\
         \x20   INDEX 01 00:00:04\n"
    );
}

#[test]
fn pregap_line_only_when_present() {
    let image = vec![0u8; 2 * SECTOR];
    let desc = parse("TRACK 01 AUDIO\nINDEX 01 00:00:00\n", ParseOptions::default()).unwrap();
    let tracks = extract(&image, &desc).unwrap();
    assert!(!render_descriptor("x.bin", &tracks).contains("PREGAP"));
}

#[test]
fn track_numbers_are_zero_padded() {
    let text: String = (1..=10)
        .map(|n| format!("TRACK {n:02} AUDIO\nINDEX 01 00:00:{:02}\n", n - 1))
        .collect();
    let desc = parse(&text, ParseOptions::default()).unwrap();
    let image = vec![0u8; 11 * SECTOR];
    let tracks = extract(&image, &desc).unwrap();

    let cue = render_descriptor("x.bin", &tracks);
    // default type is the token after TRACK, so it repeats the number
    assert!(cue.contains("  TRACK 01 01\n"));
    assert!(cue.contains("  TRACK 10 10\n"));
}

#[test]
fn image_is_plain_concatenation() {
    let mut image = vec![1u8; 4 * SECTOR];
    image.extend(vec![2u8; 2 * SECTOR]);
    let desc = parsed();
    let tracks = extract(&image, &desc).unwrap();

    let mut out = Vec::new();
    let written = write_image_to(&tracks, &mut out).unwrap();
    assert_eq!(written, image.len() as u64);
    assert_eq!(out, image);
}

#[test]
fn empty_track_list_produces_empty_image_and_header_only_descriptor() {
    let mut out = Vec::new();
    assert_eq!(write_image_to(&[], &mut out).unwrap(), 0);
    assert!(out.is_empty());

    let mut cue = Vec::new();
    write_descriptor_to("empty.bin", &[], &mut cue).unwrap();
    assert_eq!(String::from_utf8(cue).unwrap(), "FILE \"empty.bin\" BINARY\n");
}
