#![cfg(feature = "cli")]

//! Seeds the content sheets with sample rows through the data API.

use clap::{App, Arg};
use petsheets::error::Error;
use petsheets::Petsheets;

fn sample_rows(sheet: &str) -> Vec<Vec<&'static str>> {
    match sheet {
        "Tips" => vec![
            vec![
                "tip1",
                "Basic Training Tips",
                "Training",
                "Start with simple commands like sit, stay, and come. Consistency and positive reinforcement are key.",
                "",
                "",
                "Dogs",
                "Beginner",
                "John Smith",
                "5 minutes",
                "Training treats, leash",
                "Weekly",
                "High",
                "Yes",
            ],
            vec![
                "tip2",
                "Healthy Diet Guide",
                "Nutrition",
                "Feed your pet a balanced diet appropriate for their age, size, and activity level.",
                "",
                "",
                "All Pets",
                "Intermediate",
                "Dr. Sarah Wilson",
                "10 minutes",
                "Quality pet food, feeding schedule",
                "Daily",
                "High",
                "No",
            ],
        ],
        "Stories" => vec![vec![
            "story1",
            "Luna Finds a Home",
            "Maya Patel",
            "After three months at the shelter, Luna finally met her family.",
            "2024-02-10T09:00:00Z",
            "",
            "Adoption",
            "Cats",
            "Luna",
            "2 years",
            "Domestic Shorthair",
            "City Shelter",
            "42",
            "Yes",
            "Luna spent three months waiting before the Patels walked in...",
        ]],
        "Vets" => vec![vec![
            "vet1",
            "Happy Paws Clinic",
            "12 Hill Road",
            "+91 98765 43210",
            "care@happypaws.example",
            "Surgery, Dentistry, Vaccination",
            "4.8",
            "",
            "Mon-Sat 9:00-18:00",
            "Yes",
            "Dogs, Cats, Birds",
            "English, Hindi",
            "Most major providers",
            "Dr. Rao, Dr. Fernandes",
            "Orthopedics",
            "12 years",
        ]],
        "Places" => vec![vec![
            "place1",
            "Sunset Dog Park",
            "Park",
            "Marine Drive",
            "Off-leash area, Agility course",
            "4.5",
            "A fenced park with separate zones for small and large dogs.",
            "",
            "6:00-21:00",
            "Yes",
            "Dogs must be vaccinated",
            "Large",
            "Water fountains, Waste bags",
            "Weekend meetups",
            "Street parking",
            "2015",
        ]],
        _ => Vec::new(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let matches = App::new("petsheets-seed")
        .version("0.2.0")
        .about("Seed the content sheets with sample rows")
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Base URL of the data API")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("sheet")
                .short('s')
                .long("sheet")
                .value_name("NAME")
                .help("Seed a single sheet instead of all of them")
                .takes_value(true),
        )
        .get_matches();

    let base_url = matches.value_of("base-url").unwrap_or_default();
    let client = Petsheets::new(base_url);
    let sheets_client = client.sheets();

    let targets: Vec<&str> = match matches.value_of("sheet") {
        Some(sheet) => vec![sheet],
        None => vec!["Tips", "Stories", "Vets", "Places"],
    };

    for sheet in targets {
        let rows = sample_rows(sheet);
        if rows.is_empty() {
            eprintln!("no sample data for sheet {}", sheet);
            continue;
        }
        for row in rows {
            let values: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            sheets_client.append_row(sheet, &values).await?;
        }
        println!("seeded {}", sheet);
    }

    Ok(())
}
