use super::*;
use crate::config::SelectionSettings;
use std::fs;
use tempfile::tempdir;

fn exts() -> Vec<String> {
    SelectionSettings::default().extensions
}

fn type_into(prompt: &mut PathPrompt, text: &str) {
    for c in text.chars() {
        prompt.push(c);
    }
}

#[test]
fn validate_locator_accepts_existing_audio_files() {
    let dir = tempdir().unwrap();
    let song = dir.path().join("song.MP3");
    fs::write(&song, b"x").unwrap();

    assert_eq!(validate_locator(&song, &exts()), Ok(song.clone()));
}

#[test]
fn validate_locator_reports_each_failure() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.mp3");
    let text = dir.path().join("notes.txt");
    fs::write(&text, b"x").unwrap();

    assert_eq!(
        validate_locator(&missing, &exts()),
        Err(SelectError::NotFound(missing.clone()))
    );
    assert_eq!(
        validate_locator(dir.path(), &exts()),
        Err(SelectError::NotAFile(dir.path().to_path_buf()))
    );
    assert_eq!(
        validate_locator(&text, &exts()),
        Err(SelectError::Unsupported(text.clone()))
    );
}

#[test]
fn prompt_returns_valid_path_and_clears() {
    let dir = tempdir().unwrap();
    let song = dir.path().join("a.wav");
    fs::write(&song, b"x").unwrap();

    let mut prompt = PathPrompt::new(exts());
    type_into(&mut prompt, &format!("  {}  ", song.display()));

    assert_eq!(prompt.select(), Some(song));
    assert_eq!(prompt.input(), "");
    assert!(prompt.last_error().is_none());
}

#[test]
fn prompt_blank_input_is_a_cancel() {
    let mut prompt = PathPrompt::new(exts());
    type_into(&mut prompt, "   ");
    assert_eq!(prompt.select(), None);
    assert!(prompt.last_error().is_none());
}

#[test]
fn prompt_keeps_rejected_text_and_error_until_edited() {
    let mut prompt = PathPrompt::new(exts());
    type_into(&mut prompt, "/definitely/not/here.mp3");

    assert_eq!(prompt.select(), None);
    assert!(matches!(prompt.last_error(), Some(SelectError::NotFound(_))));
    assert_eq!(prompt.input(), "/definitely/not/here.mp3");

    prompt.pop();
    assert!(prompt.last_error().is_none());
    assert_eq!(prompt.input(), "/definitely/not/here.mp");
}

#[test]
fn seed_paths_expand_dirs_and_skip_invalid_args() {
    let dir = tempdir().unwrap();
    let album = dir.path().join("album");
    fs::create_dir_all(&album).unwrap();
    fs::write(album.join("02.mp3"), b"x").unwrap();
    fs::write(album.join("01.mp3"), b"x").unwrap();
    fs::write(album.join("cover.jpg"), b"x").unwrap();
    let single = dir.path().join("single.wav");
    fs::write(&single, b"x").unwrap();

    let args = vec![
        single.clone(),
        dir.path().join("missing.mp3"),
        album.clone(),
    ];
    let mut seeds = SeedPaths::new(args, &SelectionSettings::default());
    assert_eq!(seeds.len(), 3);

    assert_eq!(seeds.select(), Some(single));
    assert_eq!(seeds.select(), Some(album.join("01.mp3")));
    assert_eq!(seeds.select(), Some(album.join("02.mp3")));
    assert_eq!(seeds.select(), None);
}
