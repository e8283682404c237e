pub mod game;
pub mod players;
pub mod protocol;

/// player identifier as it appears on the wire. ids start at 1;
/// 0 is reserved for an empty cell in the serialized board.
pub type Player = u8;
/// 0-indexed column on the board.
pub type Column = usize;
/// 0-indexed row on the board. row 0 is the top row, matching wire order.
pub type Row = usize;

/// board dimensions assumed until the engine sends field settings.
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
/// run length that wins the game.
pub const CONNECT: usize = 4;

/// initialize logging on stderr. stdout belongs to the engine protocol,
/// so nothing else may write there.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Never,
    )
    .expect("initialize logger");
}
