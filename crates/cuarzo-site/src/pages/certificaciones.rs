//! Certifications page.

use crate::theme::Theme;
use cuarzo_core::{widget::FontWeight, Color, Widget};
use cuarzo_widgets::{Column, Container, Image, Reveal, Row, Text};

const CERTIFICACIONES: [(&str, &str); 3] = [
    (
        "ISO 9001",
        "Sistema de gestión de calidad certificado para servicios de \
         mantenimiento e ingeniería.",
    ),
    (
        "ISO 14001",
        "Gestión ambiental aplicada a la operación de instalaciones y al uso \
         eficiente de recursos.",
    ),
    (
        "ISO 45001",
        "Seguridad y salud en el trabajo para nuestro personal y el de \
         nuestros clientes.",
    ),
];

/// Build the certifications page.
#[must_use]
pub fn build(theme: &Theme) -> Box<dyn Widget> {
    let hero = Container::new()
        .min_height(380.0)
        .child(
            Image::new("assets/certificaciones.jpg")
                .alt("Documentación técnica y de certificación")
                .height(380.0)
                .overlay(Color::BLACK.with_alpha(0.5)),
        )
        .child(
            Container::new().padding(48.0).child(
                Text::new("Certificaciones")
                    .font_size(40.0)
                    .font_weight(FontWeight::Semibold)
                    .color(theme.on_nav)
                    .heading(),
            ),
        );

    let list = CERTIFICACIONES
        .iter()
        .enumerate()
        .fold(Column::new().gap(24.0), |column, (i, (name, detail))| {
            column.child(
                Reveal::new(
                    Row::new()
                        .gap(24.0)
                        .child(
                            Text::new(*name)
                                .font_size(24.0)
                                .font_weight(FontWeight::Semibold)
                                .color(theme.accent),
                        )
                        .child(
                            Text::new(*detail)
                                .font_size(18.0)
                                .color(theme.text)
                                .max_width(640.0),
                        ),
                )
                .delay(i as f64 * 0.1),
            )
        });

    Box::new(
        Column::new()
            .gap(48.0)
            .with_test_id("certificaciones-page")
            .child(hero)
            .child(Container::new().padding(40.0).max_width(1024.0).child(list)),
    )
}
