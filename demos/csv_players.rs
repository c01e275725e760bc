use airport_shapley::{AirportShapleyBuilder, Players};
use tabled::{Table, settings::Style};

fn main() {
    let players = Players::from_csv("tests/players.csv").expect("Failed to read players");

    let result = AirportShapleyBuilder::default()
        .players(players)
        .build()
        .expect("Failed to configure run")
        .compute()
        .expect("Failed to compute airport shapley values");

    println!("{}", Table::new(&result.values).with(Style::psql()));
    println!("total worth {}", result.total_worth);
}
