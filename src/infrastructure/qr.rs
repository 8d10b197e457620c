use crate::domain::invoice::QrImage;
use crate::domain::ports::QrRenderer;
use crate::error::{InvoiceError, Result};
use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};

/// Renders payment codes with the `qrcode` crate.
///
/// Uses error correction level L and a quiet zone, which is what banking apps
/// scan reliably at print size.
#[derive(Debug, Clone)]
pub struct QrCodeRenderer {
    min_size: u32,
}

impl QrCodeRenderer {
    pub fn new(min_size: u32) -> Self {
        Self { min_size }
    }
}

impl QrRenderer for QrCodeRenderer {
    fn render(&self, payload: &str) -> Result<QrImage> {
        let code = encode(payload)?;
        let data = code
            .render::<svg::Color>()
            .min_dimensions(self.min_size, self.min_size)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .quiet_zone(true)
            .build();

        Ok(QrImage {
            media_type: "image/svg+xml",
            data,
        })
    }
}

fn encode(payload: &str) -> Result<QrCode> {
    QrCode::with_error_correction_level(payload, EcLevel::L)
        .map_err(|e| InvoiceError::Render(format!("cannot encode payment code: {e}")))
}

/// Unicode block rendering for terminal preview.
pub fn render_to_terminal(payload: &str) -> Result<String> {
    let code = encode(payload)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Dark)
        .light_color(unicode::Dense1x2::Light)
        .build())
}
