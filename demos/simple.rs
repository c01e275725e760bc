use airport_shapley::{
    AirportShapleyBuilder, Algorithm, Players, error::Result, types::PlayerBuilder,
};

fn build_sample_players() -> Result<Players> {
    let players = vec![
        PlayerBuilder::default()
            .id("P1")
            .name("Regional jet")
            .cost(10.0)
            .build()?,
        PlayerBuilder::default()
            .id("P2")
            .name("Narrow body")
            .cost(20.0)
            .build()?,
        PlayerBuilder::default()
            .id("P3")
            .name("Wide body")
            .cost(30.0)
            .build()?,
    ];

    Ok(Players::from_players(players))
}

fn main() -> Result<()> {
    let players = build_sample_players()?;

    for algorithm in [Algorithm::Exact, Algorithm::Approximate] {
        let result = AirportShapleyBuilder::default()
            .players(players.clone())
            .algorithm(algorithm)
            .num_samples(10_000)
            .seed(7)
            .build()?
            .compute()?;

        println!("{algorithm} (total worth {})", result.total_worth);
        println!("{:>9}  {:>9}  {:>9}", "Player", "Value", "Percent");
        for sv in &result.values {
            println!(
                "{:>9}  {:>9.4}  {:>8.2}%",
                sv.player_id,
                sv.value,
                sv.percent * 100.0
            );
        }
        println!();
    }

    Ok(())
}
