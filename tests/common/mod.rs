use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 14] = [
    "client_name",
    "client_address",
    "client_ico",
    "client_dic",
    "invoice_number",
    "issue_date",
    "due_date",
    "item_description",
    "item_quantity",
    "item_price",
    "provider_name",
    "provider_address",
    "provider_ico",
    "provider_bank_account",
];

/// Writes an invoices CSV where each row varies only the fields that matter.
pub fn write_invoices(path: &Path, rows: &[(&str, &str, &str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    for &(invoice_number, quantity, price, bank_account) in rows {
        wtr.write_record([
            "Acme s.r.o.",
            "Praha",
            "12345678",
            "",
            invoice_number,
            "2024-03-01",
            "2024-03-15",
            "Konzultace",
            quantity,
            price,
            "Jan Novák",
            "Brno",
            "87654321",
            bank_account,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
