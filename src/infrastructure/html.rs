use crate::domain::invoice::InvoiceDocument;
use crate::domain::ports::DocumentLayout;
use crate::error::{InvoiceError, Result};
use std::fmt::{self, Write};

/// Printable single-page A4 invoice as a self-contained HTML file.
///
/// The QR code is inlined as SVG, so the page has no external resources.
#[derive(Debug, Clone)]
pub struct HtmlLayout {
    provider_note: String,
}

impl HtmlLayout {
    pub fn new(provider_note: impl Into<String>) -> Self {
        Self {
            provider_note: provider_note.into(),
        }
    }
}

const STYLE: &str = "@page { size: A4; margin: 0; }
body { margin: 0; font-family: Montserrat, sans-serif; color: #000; }
.page { width: 210mm; min-height: 297mm; box-sizing: border-box; padding: 10mm 15mm; background: #f0f8ff; position: relative; }
h1 { text-align: center; font-size: 16pt; margin: 0 0 10mm; }
h2 { background: #1e90ff; color: #fff; font-size: 12pt; margin: 8mm 0 2mm; padding: 2mm; }
p { font-size: 12pt; margin: 1.5mm 0; }
.qr { position: absolute; right: 15mm; bottom: 20mm; width: 50mm; text-align: center; }
.qr svg { width: 50mm; height: auto; }";

impl DocumentLayout for HtmlLayout {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn layout(&self, document: &InvoiceDocument) -> Result<Vec<u8>> {
        let qr = document
            .qr_code
            .as_ref()
            .ok_or_else(|| InvoiceError::Render("payment code image missing".to_string()))?;

        let mut html = String::new();
        self.write_page(&mut html, document, &qr.data)
            .map_err(|e| InvoiceError::Render(format!("cannot write invoice page: {e}")))?;
        Ok(html.into_bytes())
    }
}

impl HtmlLayout {
    fn write_page(&self, html: &mut String, document: &InvoiceDocument, qr_svg: &str) -> fmt::Result {
        let input = &document.input;
        write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"cs\">\n<head>\n<meta charset=\"utf-8\">\n<title>Faktura {}</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n<div class=\"page\">\n<h1>Faktura</h1>\n",
            escape(&input.invoice_number)
        )?;

        section(html, "Odběratel")?;
        line(html, None, &input.client_name)?;
        line(html, Some("Adresa"), &input.client_address)?;
        line(html, Some("IČO"), &input.client_ico)?;
        line(html, Some("DIČ"), &input.client_dic)?;

        section(html, "Dodavatel")?;
        line(html, None, &input.provider_name)?;
        line(html, Some("Adresa"), &input.provider_address)?;
        line(html, Some("IČO"), &input.provider_ico)?;
        line(html, Some("Číslo účtu"), &input.provider_bank_account)?;
        line(html, Some("IBAN"), &document.iban.to_grouped())?;
        line(html, None, &self.provider_note)?;

        section(html, "Údaje o faktuře")?;
        line(html, Some("Číslo faktury"), &input.invoice_number)?;
        line(html, Some("Datum vystavení"), &input.issue_date.to_string())?;
        line(html, Some("Datum splatnosti"), &input.due_date.to_string())?;
        line(html, Some("Popis položky"), &input.item_description)?;
        line(html, Some("Množství"), &input.item_quantity.to_string())?;
        line(html, Some("Cena položky"), &document.unit_price.to_string())?;
        line(html, Some("Celkem k úhradě"), &document.total.to_string())?;

        // SVG from the renderer is trusted markup; everything else is escaped.
        write!(
            html,
            "<div class=\"qr\">\n<h2>QR Platba</h2>\n{qr_svg}\n</div>\n</div>\n</body>\n</html>\n"
        )
    }
}

fn section(html: &mut String, title: &str) -> fmt::Result {
    writeln!(html, "<h2>{}</h2>", escape(title))
}

fn line(html: &mut String, label: Option<&str>, value: &str) -> fmt::Result {
    match label {
        Some(label) => writeln!(html, "<p>{}: {}</p>", escape(label), escape(value)),
        None => writeln!(html, "<p>{}</p>", escape(value)),
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\n' => escaped.push_str("<br>"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invoice::fixtures::sample_invoice;
    use crate::domain::invoice::{Money, QrImage};
    use crate::domain::payment::PaymentInstruction;
    use rust_decimal_macros::dec;

    fn document() -> InvoiceDocument {
        let input = sample_invoice();
        let iban = input.account_reference().unwrap().to_iban().unwrap();
        let payment = PaymentInstruction::new(iban.clone(), dec!(1500), "CZK", "2024001").unwrap();
        InvoiceDocument {
            unit_price: Money::new(input.item_price, "Kč"),
            total: Money::new(input.total().unwrap(), "Kč"),
            input,
            iban,
            payment,
            qr_code: Some(QrImage {
                media_type: "image/svg+xml",
                data: "<svg id=\"qr\"></svg>".to_string(),
            }),
        }
    }

    fn render(document: &InvoiceDocument) -> String {
        let bytes = HtmlLayout::new("Poznámka").layout(document).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_layout_contains_sections_and_fields() {
        let html = render(&document());
        for expected in [
            "<h1>Faktura</h1>",
            "<h2>Odběratel</h2>",
            "<h2>Dodavatel</h2>",
            "<h2>Údaje o faktuře</h2>",
            "<h2>QR Platba</h2>",
            "Číslo faktury: 2024001",
            "Celkem k úhradě: 1500 Kč",
            "Cena položky: 500 Kč",
            "IBAN: CZ94 2010 0000 0026 0042 0569",
            "Datum splatnosti: 2024-03-15",
            "<p>Poznámka</p>",
            "<svg id=\"qr\"></svg>",
        ] {
            assert!(html.contains(expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_layout_writes_complete_page() {
        let html = render(&document());
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.ends_with("</body>\n</html>\n"));
        assert_eq!(html.matches("<h2>").count(), 4);
    }

    #[test]
    fn test_layout_escapes_user_text() {
        let mut document = document();
        document.input.client_name = "<script>alert('x')</script> & co".to_string();
        let html = render(&document);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; co"));
    }

    #[test]
    fn test_layout_requires_qr_image() {
        let mut document = document();
        document.qr_code = None;
        assert!(matches!(
            HtmlLayout::new("").layout(&document),
            Err(InvoiceError::Render(_))
        ));
    }
}
