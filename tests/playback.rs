use std::io::Write;
use std::time::Duration;

use textanim::terminal::{CrosstermSurface, FixedSize, RecordingSurface};
use textanim::{
    read_animation, CancelToken, Offset, PassLimit, PlaybackOutcome, PlaybackSettings, Player, PlayerOptions,
    TerminalSize,
};

fn animation_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn quick(passes: PassLimit) -> Player {
    Player::new(PlayerOptions {
        delay: Duration::ZERO,
        passes,
        center: true,
    })
}

#[test]
fn file_to_screens() {
    let file = animation_file("AAA\n#BBB\n#");
    let animation = read_animation(file.path(), "#").unwrap();
    assert_eq!(animation.frame_count(), 2);
    // "AAA\n" is 3 wide and 2 tall (trailing empty line)
    assert_eq!(animation.dimensions(), (3, 2));

    let mut surface = RecordingSurface::new();
    let summary = quick(PassLimit::Count(1))
        .play(&animation, &FixedSize(TerminalSize::new(7, 4)), &mut surface, &CancelToken::new())
        .unwrap();

    assert_eq!(summary.outcome, PlaybackOutcome::Completed);
    assert_eq!(summary.offset, Some(Offset::new(2, 1)));
    // 1 blank line, 2 frame lines, 0 padding (4 - 1 - 2 - 1)
    assert_eq!(surface.screens(), ["\n  AAA\n  \n", "\n  BBB\n  \n"]);
}

#[test]
fn three_passes_then_return() {
    let file = animation_file("|\n#/\n#-\n#\\\n");
    let animation = read_animation(file.path(), "#").unwrap();
    assert_eq!(animation.frame_count(), 4);

    let mut surface = RecordingSurface::new();
    let summary = quick(PassLimit::Count(3))
        .play(&animation, &FixedSize(TerminalSize::new(80, 24)), &mut surface, &CancelToken::new())
        .unwrap();

    assert_eq!(summary.passes_completed, 3);
    assert_eq!(summary.frames_drawn, 12);
    assert_eq!(surface.screens().len(), 12);
    // Every screen is one line short of the terminal
    assert!(surface.screens().iter().all(|s| s.matches('\n').count() == 23));
}

#[test]
fn forever_cancelled_from_another_thread() {
    let animation = textanim::parse_frames("x#y", "#").unwrap();
    let cancel = CancelToken::new();
    let handle = cancel.clone();

    let canceller = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(50));
        handle.cancel();
    });

    let player = Player::new(PlayerOptions {
        delay: Duration::from_millis(5),
        passes: PassLimit::Forever,
        center: true,
    });
    let mut surface = RecordingSurface::new();
    let summary = player
        .play(&animation, &FixedSize(TerminalSize::new(10, 3)), &mut surface, &cancel)
        .unwrap();
    canceller.join().unwrap();

    assert_eq!(summary.outcome, PlaybackOutcome::Cancelled);
    assert!(summary.frames_drawn > 0);
}

#[test]
fn empty_file_plays_nothing() {
    let file = animation_file("#\n#");
    let animation = read_animation(file.path(), "#").unwrap();

    let mut surface = RecordingSurface::new();
    let summary = quick(PassLimit::Forever)
        .play(&animation, &FixedSize(TerminalSize::new(80, 24)), &mut surface, &CancelToken::new())
        .unwrap();

    assert_eq!(summary.outcome, PlaybackOutcome::Empty);
    assert!(surface.screens().is_empty());
}

#[test]
fn settings_drive_playback_to_ansi_output() {
    let settings = PlaybackSettings {
        delay_secs: 0.0,
        loops: 2,
        separator: "%%".to_string(),
        center: false,
    };
    let file = animation_file("ab%%cd");
    let animation = read_animation(file.path(), &settings.separator).unwrap();

    let mut surface = CrosstermSurface::new(Vec::new());
    Player::new(settings.player_options().unwrap())
        .play(&animation, &FixedSize(TerminalSize::new(4, 2)), &mut surface, &CancelToken::new())
        .unwrap();

    let output = String::from_utf8(surface.into_inner()).unwrap();
    let draws: Vec<&str> = output.split("\x1b[2J\x1b[1;1H").filter(|s| !s.is_empty()).collect();
    assert_eq!(draws, vec!["ab\n", "cd\n", "ab\n", "cd\n"]);
}
