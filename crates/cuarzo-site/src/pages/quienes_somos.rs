//! Company page ("Quienes Somos").

use crate::theme::Theme;
use cuarzo_core::{widget::FontWeight, Color, Widget};
use cuarzo_widgets::{Column, Container, Image, Reveal, Text};

/// Build the company page.
#[must_use]
pub fn build(theme: &Theme) -> Box<dyn Widget> {
    let hero = Container::new()
        .min_height(420.0)
        .child(
            Image::new("assets/quienes-somos.jpg")
                .alt("Equipo de trabajo en planta")
                .height(420.0)
                .overlay(Color::BLACK.with_alpha(0.5)),
        )
        .child(
            Container::new().padding(48.0).child(
                Text::new("Quienes Somos")
                    .font_size(40.0)
                    .font_weight(FontWeight::Semibold)
                    .color(theme.on_nav)
                    .heading(),
            ),
        );

    let body = Column::new()
        .gap(20.0)
        .child(Reveal::new(
            Text::new(
                "Somos una empresa de servicios de Ingeniería y Mantenimiento \
                 con presencia en entornos industriales, sanitarios y \
                 corporativos. Nuestro equipo técnico acompaña la operación de \
                 cada cliente con un único interlocutor y resultados \
                 garantizados.",
            )
            .font_size(18.0)
            .color(theme.text)
            .max_width(820.0),
        ))
        .child(
            Reveal::new(
                Text::new(
                    "Trabajamos con indicadores de Calidad y Disponibilidad \
                     para cada contrato, y con planes de mejora continua sobre \
                     las instalaciones que gestionamos.",
                )
                .font_size(18.0)
                .color(theme.text_muted)
                .max_width(820.0),
            )
            .delay(0.1),
        );

    Box::new(
        Column::new()
            .gap(48.0)
            .with_test_id("quienes-somos-page")
            .child(hero)
            .child(Container::new().padding(40.0).max_width(1024.0).child(body)),
    )
}
