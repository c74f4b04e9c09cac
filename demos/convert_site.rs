use std::fs;

use tally_import::core::*;
use tally_import::storage::{SiteFiles, publish};

const CUSTOMERS: &str = "\
customer_name,email_id,mobile_no,country
Acme & Sons,accounts@acme.example,9845012345,India
Zenith Traders,,,India
";

fn main() {
    // A throwaway site directory with one uploaded export
    let root = std::env::temp_dir().join("tally-import-demo");
    let private = root.join("private").join("files");
    fs::create_dir_all(&private).expect("create site directory");
    fs::write(private.join("customers.csv"), CUSTOMERS).expect("write upload");

    let site = SiteFiles::new(&root);
    let config = ConversionConfigBuilder::new()
        .company("Acme Holdings")
        .skip_rows(SkipRows::none())
        .build();

    let published = publish(
        DocumentKind::Customer,
        "/private/files/customers.csv",
        &site,
        &site,
        &config,
        &mut RandomIds,
    )
    .expect("conversion failed");

    println!("=== Tally customer masters ===");
    println!("URL:  {}", published.url);
    println!("File: {}", site.public_dir().join(&published.file_name).display());
    println!("Issues: {}", published.diagnostics.issues().len());

    let xml = fs::read_to_string(site.public_dir().join(&published.file_name))
        .expect("read published document");
    for line in xml.lines().take(12) {
        println!("{line}");
    }
    println!("... ({} bytes total)", xml.len());

    // A missing upload names the document type and the reference
    match publish(
        DocumentKind::SalesOrder,
        "/files/missing.csv",
        &site,
        &site,
        &config,
        &mut RandomIds,
    ) {
        Ok(_) => println!("\nunexpected success"),
        Err(e) => println!("\nExpected error: {e}"),
    }
}
