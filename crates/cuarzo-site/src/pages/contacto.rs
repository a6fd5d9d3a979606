//! Contact page.

use crate::theme::Theme;
use cuarzo_core::{widget::FontWeight, Widget};
use cuarzo_widgets::{Column, Container, Reveal, Text};

/// Build the contact page.
#[must_use]
pub fn build(theme: &Theme) -> Box<dyn Widget> {
    let details = Column::new()
        .gap(12.0)
        .child(Reveal::new(
            Text::new("info@cuarzo24.com.ar")
                .font_size(20.0)
                .color(theme.accent),
        ))
        .child(
            Reveal::new(
                Text::new("+54 11 4000 2400")
                    .font_size(20.0)
                    .color(theme.accent),
            )
            .delay(0.05),
        )
        .child(
            Reveal::new(
                Text::new("Buenos Aires, Argentina")
                    .font_size(18.0)
                    .color(theme.text_muted),
            )
            .delay(0.1),
        );

    let body = Column::new()
        .gap(28.0)
        .child(
            Text::new("Contacto")
                .font_size(40.0)
                .font_weight(FontWeight::Semibold)
                .color(theme.footer)
                .heading(),
        )
        .child(Reveal::new(
            Text::new(
                "Escribinos para coordinar un relevamiento de sus instalaciones \
                 o solicitar una propuesta de servicio.",
            )
            .font_size(18.0)
            .color(theme.text)
            .max_width(720.0),
        ))
        .child(details);

    Box::new(
        Column::new()
            .gap(48.0)
            .with_test_id("contacto-page")
            .child(Container::new().padding(48.0).max_width(1024.0).child(body)),
    )
}
