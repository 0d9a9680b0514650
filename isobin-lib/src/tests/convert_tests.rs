use super::*;
use isobin_core::RAW_SECTOR_SIZE;
use tempfile::TempDir;

const SECTOR: usize = RAW_SECTOR_SIZE as usize;

fn write_pair(dir: &Path, stem: &str, image: &[u8], cue: &str) -> PathBuf {
    let image_path = dir.join(format!("{stem}.iso"));
    fs::write(&image_path, image).unwrap();
    fs::write(dir.join(format!("{stem}.cue")), cue).unwrap();
    image_path
}

#[test]
fn with_suffix_keeps_dots_in_stem() {
    assert_eq!(
        with_suffix(Path::new("out/_Game v1.1"), ".bin"),
        PathBuf::from("out/_Game v1.1.bin")
    );
}

#[test]
fn output_stem_defaults_to_image_directory() {
    let stem = output_stem(Path::new("/discs/Game.iso"), &ConvertOptions::default()).unwrap();
    assert_eq!(stem, PathBuf::from("/discs/_Game"));
}

#[test]
fn output_stem_honors_dir_and_prefix() {
    let options = ConvertOptions::new().output_dir("/out").output_prefix("conv-");
    let stem = output_stem(Path::new("/discs/Game.iso"), &options).unwrap();
    assert_eq!(stem, PathBuf::from("/out/conv-Game"));
}

#[test]
fn plan_reports_offsets_without_writing() {
    let tmp = TempDir::new().unwrap();
    let image = vec![0u8; 7 * SECTOR];
    let path = write_pair(
        tmp.path(),
        "game",
        &image,
        "TRACK 01 MODE1/2352\nINDEX 01 00:00:00\nTRACK 02 AUDIO\nINDEX 01 00:00:05\n",
    );

    let plan = plan_conversion(&path, &ConvertOptions::default()).unwrap();
    assert_eq!(plan.image_len, image.len() as u64);
    assert_eq!(plan.tracks.len(), 2);
    assert_eq!(plan.tracks[1].offset, 5 * SECTOR as u64);
    assert_eq!(plan.tracks[1].length, 2 * SECTOR as u64);
    assert_eq!(plan.bin_path, tmp.path().join("_game.bin"));
    assert!(!plan.bin_path.exists());
    assert!(!plan.cue_path.exists());
}

#[test]
fn direct_write_mode_leaves_no_temp_files() {
    let tmp = TempDir::new().unwrap();
    let path = write_pair(
        tmp.path(),
        "game",
        &vec![7u8; 3 * SECTOR],
        "TRACK 01 AUDIO\nINDEX 01 00:00:00\n",
    );
    let options = ConvertOptions::new().write_mode(WriteMode::Direct);
    let output = convert_image(&path, &options).unwrap();
    assert_eq!(fs::read(&output.bin_path).unwrap(), vec![7u8; 3 * SECTOR]);

    let names: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(names.iter().all(|n| !n.ends_with(".tmp")), "{names:?}");
}

#[test]
fn refuses_to_overwrite_the_source_descriptor() {
    let tmp = TempDir::new().unwrap();
    let path = write_pair(
        tmp.path(),
        "game",
        &vec![0u8; SECTOR],
        "TRACK 01 AUDIO\nINDEX 01 00:00:00\n",
    );
    let options = ConvertOptions::new().output_prefix("");
    let err = convert_image(&path, &options).unwrap_err();
    assert!(matches!(err, ConvertError::Io(_)), "got {err:?}");
    assert_eq!(
        fs::read_to_string(tmp.path().join("game.cue")).unwrap(),
        "TRACK 01 AUDIO\nINDEX 01 00:00:00\n"
    );
}

#[test]
fn plan_refuses_to_overwrite_an_input() {
    let tmp = TempDir::new().unwrap();
    let path = write_pair(
        tmp.path(),
        "game",
        &vec![0u8; SECTOR],
        "TRACK 01 AUDIO\nINDEX 01 00:00:00\n",
    );
    let options = ConvertOptions::new().output_prefix("");
    let err = plan_conversion(&path, &options).unwrap_err();
    assert!(matches!(err, ConvertError::Io(_)), "got {err:?}");
}

#[test]
fn refuses_overwrite_through_an_indirect_output_dir() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("sub")).unwrap();
    let cue = "TRACK 01 AUDIO\nINDEX 01 00:00:00\n";
    let path = write_pair(tmp.path(), "game", &vec![3u8; SECTOR], cue);

    // sub/.. names the image's own directory
    let options = ConvertOptions::new()
        .output_dir(tmp.path().join("sub").join(".."))
        .output_prefix("");
    let err = convert_image(&path, &options).unwrap_err();
    assert!(matches!(err, ConvertError::Io(_)), "got {err:?}");
    assert_eq!(fs::read_to_string(tmp.path().join("game.cue")).unwrap(), cue);
    assert_eq!(fs::read(&path).unwrap(), vec![3u8; SECTOR]);
}

#[test]
fn resolved_outputs_in_another_dir_are_allowed() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("out")).unwrap();
    let path = write_pair(
        tmp.path(),
        "game",
        &vec![0u8; SECTOR],
        "TRACK 01 AUDIO\nINDEX 01 00:00:00\n",
    );
    let options = ConvertOptions::new()
        .output_dir(tmp.path().join("out"))
        .output_prefix("");
    let plan = plan_conversion(&path, &options).unwrap();
    assert_eq!(plan.bin_path, tmp.path().join("out").join("game.bin"));
}

#[test]
fn failed_rename_removes_temp_file() {
    let tmp = TempDir::new().unwrap();
    // a non-empty directory at the destination makes the rename fail
    let dest = tmp.path().join("x.bin");
    fs::create_dir(&dest).unwrap();
    fs::write(dest.join("keep"), b"x").unwrap();

    let result = write_artifact(&dest, WriteMode::Atomic, |w| w.write_all(b"data"));
    assert!(result.is_err());
    assert!(!tmp.path().join("x.bin.tmp").exists());
    assert!(dest.join("keep").exists());
}

#[test]
fn failed_atomic_write_removes_temp_file() {
    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("x.bin");
    let err = write_artifact(&dest, WriteMode::Atomic, |_| {
        Err(io::Error::other("boom"))
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "boom");
    assert!(!dest.exists());
    assert!(!tmp.path().join("x.bin.tmp").exists());
}
