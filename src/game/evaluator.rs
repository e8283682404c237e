use super::board::Board;
use crate::Player;
use crate::CONNECT;

/// true iff the player owns four consecutive cells along any horizontal,
/// vertical, or diagonal line. pure in the board contents and the id;
/// an empty board is never a win.
pub fn has_four_in_row(board: &Board, player: Player) -> bool {
    horizontal(board, player)
        || vertical(board, player)
        || descending(board, player)
        || ascending(board, player)
}

fn horizontal(board: &Board, player: Player) -> bool {
    if board.cols() < CONNECT {
        return false;
    }
    (0..board.rows()).any(|r| {
        (0..=board.cols() - CONNECT).any(|c| (0..CONNECT).all(|i| board.get(r, c + i).is(player)))
    })
}

fn vertical(board: &Board, player: Player) -> bool {
    if board.rows() < CONNECT {
        return false;
    }
    (0..board.cols()).any(|c| {
        (0..=board.rows() - CONNECT).any(|r| (0..CONNECT).all(|i| board.get(r + i, c).is(player)))
    })
}

/// the '\' orientation: runs step down and to the right from (r, c).
fn descending(board: &Board, player: Player) -> bool {
    if board.rows() < CONNECT || board.cols() < CONNECT {
        return false;
    }
    (0..=board.rows() - CONNECT).any(|r| {
        (0..=board.cols() - CONNECT)
            .any(|c| (0..CONNECT).all(|i| board.get(r + i, c + i).is(player)))
    })
}

/// the '/' orientation: runs step up and to the right from (r, c).
fn ascending(board: &Board, player: Player) -> bool {
    if board.rows() < CONNECT || board.cols() < CONNECT {
        return false;
    }
    (CONNECT - 1..board.rows()).any(|r| {
        (0..=board.cols() - CONNECT)
            .any(|c| (0..CONNECT).all(|i| board.get(r - i, c + i).is(player)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::parse(text, 6, 7).unwrap()
    }

    #[test]
    fn empty_board_is_no_win() {
        assert!(!has_four_in_row(&Board::default(), 1));
        assert!(!has_four_in_row(&Board::default(), 2));
    }

    #[test]
    fn horizontal_needs_the_fourth_disc() {
        let mut board = Board::default();
        for col in 1..4 {
            board.place(col, 1).unwrap();
        }
        assert!(!has_four_in_row(&board, 1));
        board.place(4, 1).unwrap();
        assert!(has_four_in_row(&board, 1));
        assert!(!has_four_in_row(&board, 2));
    }

    #[test]
    fn vertical_needs_the_fourth_disc() {
        let mut board = Board::default();
        for _ in 0..3 {
            board.place(5, 2).unwrap();
        }
        assert!(!has_four_in_row(&board, 2));
        board.place(5, 2).unwrap();
        assert!(has_four_in_row(&board, 2));
    }

    #[test]
    fn descending_diagonal() {
        // player 1 runs from (1,1) down-right to (4,4)
        let board = board(
            "0,0,0,0,0,0,0;\
             0,1,0,0,0,0,0;\
             0,2,1,0,0,0,0;\
             0,1,2,1,0,0,0;\
             0,2,1,2,1,0,0;\
             0,1,2,1,1,0,0",
        );
        assert!(has_four_in_row(&board, 1));
        assert!(!has_four_in_row(&board, 2));
    }

    #[test]
    fn ascending_diagonal() {
        // player 2 runs from (5,0) up-right to (2,3)
        let board = board(
            "0,0,0,0,0,0,0;\
             0,0,0,0,0,0,0;\
             0,0,0,2,0,0,0;\
             0,0,2,1,0,0,0;\
             0,2,1,1,0,0,0;\
             2,1,1,2,0,0,0",
        );
        assert!(has_four_in_row(&board, 2));
        assert!(!has_four_in_row(&board, 1));
    }

    #[test]
    fn run_of_mixed_players_is_no_win() {
        let board = board(
            "0,0,0,0,0,0,0;\
             0,0,0,0,0,0,0;\
             0,0,0,0,0,0,0;\
             0,0,0,0,0,0,0;\
             0,0,0,0,0,0,0;\
             1,1,2,1,1,1,0",
        );
        assert!(!has_four_in_row(&board, 1));
    }
}
