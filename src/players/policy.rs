use crate::game::error::Error;
use crate::protocol::session::Session;
use crate::Column;

/// a move selector. given the session state, commit to one column before
/// the deadline in `session.time_left()` runs out. the budget is advisory;
/// the engine enforces the hard timeout on its side.
pub trait Policy {
    fn choose(&mut self, session: &Session) -> Result<Column, Error>;
}
