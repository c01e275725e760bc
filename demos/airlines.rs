use airport_shapley::{AirportShapleyBuilder, Algorithm, Player, error::Result};

fn main() -> Result<()> {
    // Movements tagged with a runway class (1 = short, 3 = long) and the
    // airlines operating them; M2 is a code-share flight
    let players = vec![
        Player::with_tier("M1", 1, ["AF"]),
        Player::with_tier("M2", 2, ["AF", "KL"]),
        Player::with_tier("M3", 3, ["KL"]),
        Player::with_tier("M4", 1, ["LH"]),
        Player::with_tier("M5", 2, ["LH"]),
    ];

    let result = AirportShapleyBuilder::default()
        .players(players)
        .algorithm(Algorithm::ConfigurationValue)
        .runway_cost_steps(vec![6.0, 10.0, 16.0])
        .build()?
        .compute()?;

    println!("{:>9}  {:>9}  {:>9}", "Movement", "Value", "Percent");
    for sv in &result.values {
        println!(
            "{:>9}  {:>9.4}  {:>8.2}%",
            sv.player_id,
            sv.value,
            sv.percent * 100.0
        );
    }
    println!(
        "total worth {}, distributed {:.4}",
        result.total_worth,
        result.sum()
    );

    Ok(())
}
