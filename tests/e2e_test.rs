// Test complete flow from a machine description to the matches in a text
// Run with `cargo test --test e2e_test`
#![cfg(feature = "serde")]

use std::fs;

use regex::Regex;
use tagged_fsm::{MachineDescription, Match, StateMachine};

#[test]
fn e2e_test() {
    // Initialize the logger
    let _ = env_logger::builder().is_test(true).try_init();

    // Initialize the regex for newlines. It is used to make the tests platform independent.
    let rx_newline: Regex = Regex::new(r"\r?\n|\r").unwrap();

    // Iterate over all json files in the data directory that contain machine descriptions
    for entry in fs::read_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data")).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().unwrap() != "json" {
            continue;
        }

        println!("--------------------------------------------------");
        println!("Entry: {:?}", entry.file_name());
        println!("--------------------------------------------------");

        // Read the json file
        let file = fs::File::open(&path).unwrap();
        let description: MachineDescription<char, String, String> =
            MachineDescription::from_reader(file).unwrap_or_else(|e| {
                panic!("**** Failed to read json file {}: {}", path.display(), e)
            });

        let machine: StateMachine<char, String, String> = description.into();
        machine
            .check_topology()
            .unwrap_or_else(|e| panic!("**** Invalid machine in {}: {}", path.display(), e));

        // Open the input file which has the same base name as the json file but with a .input
        // extension.
        let input_path = path.with_extension("input");
        let input = fs::read_to_string(&input_path).unwrap();
        let input: Vec<char> = rx_newline.replace_all(&input, "\n").chars().collect();

        // Collect all matches
        let matches: Vec<Match<String>> = machine.find_iter(&input).collect();

        println!("Matches:\n{}\n", serde_json::to_string(&matches).unwrap());
        for ma in &matches {
            let text: String = ma.span().slice(&input).iter().collect();
            println!("{:?}, Label: {}", text, ma.label());
        }
        println!("Matches count: {}", matches.len());

        // Open the expected output file which has the same base name as the json file but with a
        // .tokens extension.
        let token_file_path = path.with_extension("tokens");
        let token_file = fs::File::open(&token_file_path).unwrap();
        let expected_matches: Vec<Match<String>> = serde_json::from_reader(&token_file).unwrap();

        // Compare the matches
        assert_eq!(matches, expected_matches);
    }
}
