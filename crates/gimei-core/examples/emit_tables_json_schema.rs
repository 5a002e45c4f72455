use gimei_core::{addresses_json_schema, names_json_schema};

fn main() {
    let schemas = serde_json::json!({
        "names": names_json_schema(),
        "addresses": addresses_json_schema(),
    });
    let json = serde_json::to_string_pretty(&schemas).expect("serialize json schema");
    println!("{json}");
}
