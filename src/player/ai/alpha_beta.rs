//! Depth-limited minimax with alpha-beta pruning.
//!
//! O maximizes and X minimizes; scores are never negated between plies.
//! Children are visited in ascending index order and a move is only
//! recorded on strict improvement, so equal scores resolve to the lowest
//! index.

use super::evaluator::Evaluator;
use crate::core::{Board, Move, Player, Score, SearchConfig, MAX_SCORE, MIN_SCORE};
use crate::logic::{apply_move, is_terminal, legal_moves};
use crate::player::PlayerController;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub mv: Move,
    pub score: Score,
    /// Number of nodes visited, root included.
    pub nodes: u64,
}

pub struct AlphaBeta {
    config: SearchConfig,
}

impl AlphaBeta {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Picks a move for `player` looking `depth_limit` plies ahead.
    ///
    /// Depth 0 or a finished board returns `Move::NoMove` together with the
    /// static evaluation of `board`.
    pub fn choose_move(
        &self,
        player: Player,
        evaluator: &dyn Evaluator,
        board: &Board,
        depth_limit: usize,
    ) -> (Move, Score) {
        let result = self.search(player, evaluator, board, depth_limit);
        (result.mv, result.score)
    }

    pub fn search(
        &self,
        player: Player,
        evaluator: &dyn Evaluator,
        board: &Board,
        depth_limit: usize,
    ) -> SearchResult {
        if depth_limit == 0 || is_terminal(board, self.config.goal) {
            return SearchResult {
                mv: Move::NoMove,
                score: static_eval(evaluator, board),
                nodes: 1,
            };
        }

        if self.config.parallel {
            self.search_root_parallel(player, evaluator, board, depth_limit)
        } else {
            self.search_root(player, evaluator, board, depth_limit)
        }
    }

    // --- Search Root ---
    fn search_root(
        &self,
        player: Player,
        evaluator: &dyn Evaluator,
        board: &Board,
        depth: usize,
    ) -> SearchResult {
        let mut nodes = 1;
        let mut root = RootBest::new(player);

        for mv in legal_moves(board) {
            let Ok(child) = apply_move(board, mv, player) else {
                continue;
            };
            let score = self.alpha_beta(
                evaluator,
                &child,
                player.opponent(),
                depth - 1,
                root.alpha,
                root.beta,
                &mut nodes,
            );
            root.offer(mv, score);

            if root.alpha >= root.beta {
                break;
            }
        }

        root.finish(nodes)
    }

    /// Root children run on rayon with full windows. Aggregation walks the
    /// results in index order with the same improvement rule as
    /// [`Self::search_root`], so the chosen move and score match it.
    fn search_root_parallel(
        &self,
        player: Player,
        evaluator: &dyn Evaluator,
        board: &Board,
        depth: usize,
    ) -> SearchResult {
        let children: Vec<(Move, Board)> = legal_moves(board)
            .filter_map(|mv| apply_move(board, mv, player).ok().map(|b| (mv, b)))
            .collect();

        let scored: Vec<(Move, Score, u64)> = children
            .par_iter()
            .map(|(mv, child)| {
                let mut nodes = 0;
                let score = self.alpha_beta(
                    evaluator,
                    child,
                    player.opponent(),
                    depth - 1,
                    MIN_SCORE,
                    MAX_SCORE,
                    &mut nodes,
                );
                (*mv, score, nodes)
            })
            .collect();

        let mut nodes = 1;
        let mut root = RootBest::new(player);
        for (mv, score, n) in scored {
            nodes += n;
            root.offer(mv, score);
        }
        root.finish(nodes)
    }

    // --- Alpha-Beta Search ---
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &self,
        evaluator: &dyn Evaluator,
        board: &Board,
        player: Player,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        nodes: &mut u64,
    ) -> Score {
        *nodes += 1;

        // 深さ切れ、勝敗決定、盤面が埋まった場合は静的評価
        if depth == 0 || is_terminal(board, self.config.goal) {
            return static_eval(evaluator, board);
        }

        for mv in legal_moves(board) {
            let Ok(child) = apply_move(board, mv, player) else {
                continue;
            };
            let score = self.alpha_beta(
                evaluator,
                &child,
                player.opponent(),
                depth - 1,
                alpha,
                beta,
                nodes,
            );

            if player.is_maximizing() {
                if score > alpha {
                    alpha = score;
                }
            } else if score < beta {
                beta = score;
            }

            if alpha >= beta {
                break; // cutoff
            }
        }

        if player.is_maximizing() {
            alpha
        } else {
            beta
        }
    }
}

/// Running window and best move at the root.
struct RootBest {
    player: Player,
    alpha: Score,
    beta: Score,
    best: Move,
}

impl RootBest {
    fn new(player: Player) -> Self {
        Self {
            player,
            alpha: MIN_SCORE,
            beta: MAX_SCORE,
            best: Move::NoMove,
        }
    }

    fn offer(&mut self, mv: Move, score: Score) {
        let improved = if self.player.is_maximizing() {
            score > self.alpha
        } else {
            score < self.beta
        };

        if improved {
            if self.player.is_maximizing() {
                self.alpha = score;
            } else {
                self.beta = score;
            }
            self.best = mv;
        } else if self.best.is_none() {
            // Every line so far ends at the losing sentinel. Still play the
            // first legal cell rather than passing.
            self.best = mv;
        }
    }

    fn finish(self, nodes: u64) -> SearchResult {
        let score = if self.player.is_maximizing() {
            self.alpha
        } else {
            self.beta
        };
        SearchResult {
            mv: self.best,
            score,
            nodes,
        }
    }
}

/// Search-backed player: one evaluator plus its own depth limit.
pub struct AlphaBetaAI {
    player_id: Player,
    name: String,
    evaluator: Box<dyn Evaluator>,
    depth: usize,
    engine: AlphaBeta,
}

impl AlphaBetaAI {
    pub fn new(
        player_id: Player,
        name: &str,
        evaluator: Box<dyn Evaluator>,
        config: SearchConfig,
    ) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            evaluator,
            depth: config.max_depth,
            engine: AlphaBeta::new(config),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn search(&self, board: &Board) -> SearchResult {
        self.engine
            .search(self.player_id, self.evaluator.as_ref(), board, self.depth)
    }
}

impl PlayerController for AlphaBetaAI {
    fn choose_move(&self, board: &Board) -> Move {
        let result = self.search(board);
        log::debug!(
            "{} ({}, {}, depth {}): {} score={} nodes={}",
            self.name,
            self.player_id,
            self.evaluator.name(),
            self.depth,
            result.mv,
            result.score,
            result.nodes
        );
        result.mv
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn player(&self) -> Player {
        self.player_id
    }
}

pub(crate) fn static_eval(evaluator: &dyn Evaluator, board: &Board) -> Score {
    evaluator.evaluate(board).clamp(MIN_SCORE, MAX_SCORE)
}
