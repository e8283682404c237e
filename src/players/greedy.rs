use super::policy::Policy;
use crate::game::error::Error;
use crate::game::evaluator::has_four_in_row;
use crate::protocol::session::Session;
use crate::Column;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// one-ply greedy: take the lowest-indexed column that wins immediately,
/// otherwise a uniformly random column that still has room.
pub struct Greedy {
    rng: SmallRng,
}

impl Default for Greedy {
    fn default() -> Self {
        Self::new()
    }
}

impl Greedy {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Policy for Greedy {
    fn choose(&mut self, session: &Session) -> Result<Column, Error> {
        let me = session.settings().bot_id();
        let board = session.board();
        for col in 0..board.cols() {
            match board.simulate(col, me) {
                Ok(probe) if has_four_in_row(&probe, me) => return Ok(col),
                Ok(_) => {}
                // a full column is just a dead candidate
                Err(Error::ColumnFull(_)) => {}
                Err(fault) => return Err(fault),
            }
        }
        let legal = board.legal_columns();
        if legal.is_empty() {
            return Err(Error::NoLegalMove);
        }
        Ok(legal[self.rng.random_range(0..legal.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(field: &str, botid: &str) -> Session {
        let mut session = Session::new();
        session.configure("your_botid", botid).unwrap();
        session.refresh(field).unwrap();
        session
    }

    const EMPTY: &str = "0,0,0,0,0,0,0;0,0,0,0,0,0,0;0,0,0,0,0,0,0;\
                         0,0,0,0,0,0,0;0,0,0,0,0,0,0;0,0,0,0,0,0,0";

    #[test]
    fn lowest_winning_column_regardless_of_seed() {
        // column 2 completes a vertical run
        let field = "0,0,0,0,0,0,0;\
                     0,0,0,0,0,0,0;\
                     0,0,0,0,0,0,0;\
                     0,0,1,0,0,0,0;\
                     0,0,1,0,0,0,0;\
                     0,0,1,2,2,0,1";
        for seed in 0..16 {
            let mut greedy = Greedy::seeded(seed);
            assert!(greedy.choose(&session(field, "1")) == Ok(2));
        }
    }

    #[test]
    fn fallback_avoids_full_columns() {
        // every column but 5 is packed solid with the opponent's discs
        let field = vec!["2,2,2,2,2,0,2"; 6].join(";");
        for seed in 0..16 {
            let mut greedy = Greedy::seeded(seed);
            assert!(greedy.choose(&session(&field, "1")) == Ok(5));
        }
    }

    #[test]
    fn full_board_has_no_legal_move() {
        let field = vec!["1,2,1,2,1,2,1"; 6].join(";");
        let mut greedy = Greedy::seeded(0);
        assert!(greedy.choose(&session(&field, "1")) == Err(Error::NoLegalMove));
    }

    #[test]
    fn random_fallback_is_always_legal() {
        for seed in 0..32 {
            let mut greedy = Greedy::seeded(seed);
            let col = greedy.choose(&session(EMPTY, "1")).unwrap();
            assert!(col < 7);
        }
    }
}
