use crate::core::{Board, Cell, GameError, Move, Player, SearchConfig};
use crate::logic::{has_won, winner};
use crate::player::PlayerController;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Winner(p) => write!(f, "{} wins", p),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Finished(Outcome),
}

pub struct Game {
    pub board: Board,
    pub current_player: Player,
    /// 指し手の履歴
    pub history: Vec<(Player, Move)>,
    goal: usize,
    state: GameState,
}

impl Game {
    /// Empty board, O to move.
    pub fn new(config: &SearchConfig) -> Self {
        Self::with_board(Board::empty(config), config.goal)
    }

    /// Starts from an existing position with O to move. A position that is
    /// already won or full starts out finished.
    pub fn with_board(board: Board, goal: usize) -> Self {
        let mut game = Game {
            board,
            current_player: Player::O,
            history: Vec::new(),
            goal,
            state: GameState::InProgress,
        };
        game.state = game.settle();
        game
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Finished(outcome) => Some(outcome),
            GameState::InProgress => None,
        }
    }

    fn settle(&self) -> GameState {
        if let Some(p) = winner(&self.board, self.goal) {
            GameState::Finished(Outcome::Winner(p))
        } else if self.board.is_full() {
            GameState::Finished(Outcome::Draw)
        } else {
            GameState::InProgress
        }
    }

    /// Plays one half-move for the side to move and updates the state.
    pub fn step(&mut self, controller: &dyn PlayerController) -> Result<Move, GameError> {
        if self.state != GameState::InProgress {
            return Ok(Move::NoMove);
        }

        let player = self.current_player;
        let mv = controller.choose_move(&self.board);
        let index = match mv.index() {
            Some(index) => index,
            None => {
                return Err(GameError::Passed {
                    player,
                    empty: self.board.count(Cell::Empty),
                })
            }
        };

        self.board
            .place(index, player)
            .map_err(|source| GameError::IllegalMove { player, source })?;
        self.history.push((player, mv));

        self.state = if has_won(player, &self.board, self.goal) {
            GameState::Finished(Outcome::Winner(player))
        } else if self.board.is_full() {
            GameState::Finished(Outcome::Draw)
        } else {
            GameState::InProgress
        };
        self.current_player = player.opponent();

        Ok(mv)
    }

    /// Alternates `o` and `x` until someone wins or the board fills.
    /// `on_move` observes the game after every half-move.
    pub fn play<F>(
        &mut self,
        o: &dyn PlayerController,
        x: &dyn PlayerController,
        mut on_move: F,
    ) -> Result<Outcome, GameError>
    where
        F: FnMut(&Game, Player, Move),
    {
        log::info!("{} plays O and {} plays X", o.name(), x.name());

        loop {
            if let GameState::Finished(outcome) = self.state {
                log::info!("game over after {} moves: {}", self.history.len(), outcome);
                return Ok(outcome);
            }

            let player = self.current_player;
            let controller = match player {
                Player::O => o,
                Player::X => x,
            };
            let mv = self.step(controller)?;
            on_move(self, player, mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ai::eval::{Lines, PieceCount};
    use crate::player::ai::AlphaBeta;
    use crate::player::AlphaBetaAI;

    /// Plays a fixed list of cells in order.
    struct Scripted {
        player: Player,
        moves: Vec<usize>,
    }

    impl PlayerController for Scripted {
        fn choose_move(&self, board: &Board) -> Move {
            self.moves
                .iter()
                .copied()
                .find(|&i| board.cell(i) == Some(Cell::Empty))
                .map(Move::Place)
                .unwrap_or(Move::NoMove)
        }

        fn name(&self) -> &str {
            "scripted"
        }

        fn player(&self) -> Player {
            self.player
        }
    }

    struct Stubborn;

    impl PlayerController for Stubborn {
        fn choose_move(&self, _board: &Board) -> Move {
            Move::Place(0)
        }

        fn name(&self) -> &str {
            "stubborn"
        }

        fn player(&self) -> Player {
            Player::X
        }
    }

    #[test]
    fn test_full_board_without_runs_is_draw() {
        let board = Board::from_rows(&["OOXXO", "XXOOX", "OOXXO", "XXOOX", "OOXXO"]).unwrap();
        let game = Game::with_board(board, 4);
        assert_eq!(game.state(), GameState::Finished(Outcome::Draw));
    }

    #[test]
    fn test_draw_by_filling() {
        // 3x3 で goal 4 は勝てない
        let config = SearchConfig {
            goal: 4,
            rows: 3,
            columns: 3,
            max_depth: 2,
            parallel: false,
        };
        let o = AlphaBetaAI::new(Player::O, "o", Box::new(PieceCount), config);
        let x = AlphaBetaAI::new(Player::X, "x", Box::new(PieceCount), config);
        let mut game = Game::new(&config);
        let mut seen = 0;
        let outcome = game.play(&o, &x, |_, _, _| seen += 1).unwrap();
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(seen, 9);
        assert!(game.board.is_full());
    }

    #[test]
    fn test_x_wins_and_game_stops() {
        let config = SearchConfig::default();
        let o = Scripted {
            player: Player::O,
            moves: vec![0, 6, 12, 18, 24],
        };
        let x = Scripted {
            player: Player::X,
            moves: vec![4, 9, 14, 19],
        };
        let mut game = Game::new(&config);
        let outcome = game.play(&o, &x, |_, _, _| {}).unwrap();
        assert_eq!(outcome, Outcome::Winner(Player::X));
        assert_eq!(game.history.len(), 8);
        assert_eq!(game.history.last(), Some(&(Player::X, Move::Place(19))));
    }

    #[test]
    fn test_illegal_move_is_an_error() {
        let config = SearchConfig::default();
        let o = Scripted {
            player: Player::O,
            moves: vec![0, 1, 2],
        };
        let mut game = Game::new(&config);
        let err = game.play(&o, &Stubborn, |_, _, _| {}).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove {
                player: Player::X,
                ..
            }
        ));
    }

    #[test]
    fn test_pass_on_open_board_is_an_error() {
        let config = SearchConfig::default();
        let o = Scripted {
            player: Player::O,
            moves: vec![],
        };
        let x = Scripted {
            player: Player::X,
            moves: vec![],
        };
        let mut game = Game::new(&config);
        let err = game.play(&o, &x, |_, _, _| {}).unwrap_err();
        assert!(matches!(err, GameError::Passed { player: Player::O, empty: 25 }));
    }

    #[test]
    fn test_piece_count_self_play_terminates() {
        let config = SearchConfig::default();
        let o = AlphaBetaAI::new(Player::O, "Default O", Box::new(PieceCount), config);
        let x = AlphaBetaAI::new(Player::X, "Default X", Box::new(PieceCount), config);
        let mut game = Game::new(&config);
        let outcome = game.play(&o, &x, |_, _, _| {}).unwrap();

        assert!(game.history.len() <= 25);
        assert_eq!(game.state(), GameState::Finished(outcome));
        match outcome {
            Outcome::Winner(p) => assert!(has_won(p, &game.board, config.goal)),
            Outcome::Draw => assert!(game.board.is_full()),
        }
        // O と X が交互に指している
        assert!(game
            .history
            .iter()
            .enumerate()
            .all(|(i, (p, _))| *p == if i % 2 == 0 { Player::O } else { Player::X }));
    }

    #[test]
    fn test_players_keep_their_own_depth() {
        let config = SearchConfig {
            goal: 3,
            rows: 4,
            columns: 4,
            max_depth: 2,
            parallel: false,
        };
        let o = AlphaBetaAI::new(
            Player::O,
            "shallow",
            Box::new(Lines { goal: 3 }),
            config.with_depth(1),
        );
        let x = AlphaBetaAI::new(
            Player::X,
            "deep",
            Box::new(Lines { goal: 3 }),
            config.with_depth(3),
        );
        assert_eq!(o.depth(), 1);
        assert_eq!(x.depth(), 3);

        let mut game = Game::new(&config);
        let outcome = game.play(&o, &x, |_, _, _| {}).unwrap();
        assert!(game.history.len() <= 16);
        assert_eq!(game.outcome(), Some(outcome));

        // 最初の 2 手をそれぞれの深さで再探索して一致を確認
        let engine = AlphaBeta::new(config);
        let eval = Lines { goal: 3 };
        let mut board = Board::empty(&config);
        let (first, _) = engine.choose_move(Player::O, &eval, &board, o.depth());
        assert_eq!(game.history[0], (Player::O, first));
        board.place(first.index().unwrap(), Player::O).unwrap();

        let (reply, _) = engine.choose_move(Player::X, &eval, &board, x.depth());
        assert_eq!(game.history[1], (Player::X, reply));
    }
}
