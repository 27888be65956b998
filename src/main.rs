use noughts_ai::core::Player;
use noughts_ai::display::print_board;
use noughts_ai::game::{Game, Outcome};
use noughts_ai::player::ai::{AlphaBetaAI, GameConfig, StrategyRegistry};
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 3 {
        eprintln!(
            "usage: {} [PLAYER1_STRATEGY] [PLAYER2_STRATEGY]",
            args.first().map(String::as_str).unwrap_or("noughts-ai")
        );
        std::process::exit(1);
    }

    let registry = StrategyRegistry::with_builtins();
    let mut config = GameConfig::load_or_default();

    // コマンドライン引数で戦略を上書き
    for (player, arg) in [Player::O, Player::X].into_iter().zip(args.iter().skip(1)) {
        let strategy = config.strategy_mut(player);
        strategy.name = arg.clone();
        strategy.evaluator = arg.clone();
    }

    let o = build_player(&registry, &config, Player::O)?;
    let x = build_player(&registry, &config, Player::X)?;

    println!("{} plays O and {} plays X", config.o.name, config.x.name);
    println!("Let's get ready to rumble!!!");
    println!();

    let color = config.color;
    let mut game = Game::new(&config.search);
    let outcome = game.play(&o, &x, |game, _, _| {
        if let Err(e) = print_board(&game.board, color) {
            log::warn!("failed to print board: {}", e);
        }
    })?;

    let winner = match outcome {
        Outcome::Winner(player) => config.strategy(player).name.as_str(),
        Outcome::Draw => "no-one",
    };
    println!("The winner was: {}", winner);

    Ok(())
}

fn build_player(
    registry: &StrategyRegistry,
    config: &GameConfig,
    player: Player,
) -> anyhow::Result<AlphaBetaAI> {
    let strategy = config.strategy(player);
    let evaluator = registry
        .build(&strategy.evaluator, &config.search)
        .map_err(|e| anyhow::anyhow!("{} (available: {})", e, registry.names().join(", ")))?;
    let search = config.search.with_depth(config.depth_for(player));
    Ok(AlphaBetaAI::new(player, &strategy.name, evaluator, search))
}
