use super::eval::{Lines, PieceCount, Victory};
use super::evaluator::Evaluator;
use crate::core::{ConfigError, SearchConfig};
use std::collections::BTreeMap;

/// Builds an evaluator for a given board configuration.
pub type EvaluatorFactory = Box<dyn Fn(&SearchConfig) -> Box<dyn Evaluator> + Send + Sync>;

/// Registry for looking up evaluators by name
pub struct StrategyRegistry {
    factories: BTreeMap<String, EvaluatorFactory>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Registry preloaded with `piece-count`, `victory` and `lines`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("piece-count", |_: &SearchConfig| -> Box<dyn Evaluator> {
            Box::new(PieceCount)
        });
        registry.register("victory", |config: &SearchConfig| -> Box<dyn Evaluator> {
            Box::new(Victory { goal: config.goal })
        });
        registry.register("lines", |config: &SearchConfig| -> Box<dyn Evaluator> {
            Box::new(Lines { goal: config.goal })
        });
        registry
    }

    /// Register an evaluator factory, replacing any previous one of that name
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(&SearchConfig) -> Box<dyn Evaluator> + Send + Sync + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    pub fn build(
        &self,
        name: &str,
        config: &SearchConfig,
    ) -> Result<Box<dyn Evaluator>, ConfigError> {
        self.factories
            .get(name)
            .map(|factory| factory(config))
            .ok_or_else(|| ConfigError::UnknownEvaluator(name.to_string()))
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, MAX_SCORE};
    use crate::player::ai::evaluator::FnEvaluator;

    #[test]
    fn test_builtins() {
        let registry = StrategyRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["lines", "piece-count", "victory"]);

        let config = SearchConfig {
            goal: 2,
            ..SearchConfig::default()
        };
        let victory = registry.build("victory", &config).unwrap();
        let board = Board::from_rows(&["OO.", "...", "..."]).unwrap();
        assert_eq!(victory.evaluate(&board), MAX_SCORE);
    }

    #[test]
    fn test_unknown_name() {
        let registry = StrategyRegistry::with_builtins();
        let err = registry
            .build("nope", &SearchConfig::default())
            .err()
            .map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("unknown evaluator: nope"));
    }

    #[test]
    fn test_register_custom() {
        let mut registry = StrategyRegistry::new();
        registry.register("constant", |_: &SearchConfig| -> Box<dyn Evaluator> {
            Box::new(FnEvaluator::new("constant", |_: &Board| 7))
        });
        assert!(registry.contains("constant"));
        let eval = registry.build("constant", &SearchConfig::default()).unwrap();
        assert_eq!(eval.evaluate(&Board::new(5, 5)), 7);
        assert_eq!(eval.name(), "constant");
    }
}
