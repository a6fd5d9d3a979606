//! Landing page.

use crate::theme::Theme;
use cuarzo_core::{widget::FontWeight, Color, Widget};
use cuarzo_widgets::{Column, Container, Image, Reveal, Text};

/// Build the landing page.
#[must_use]
pub fn build(theme: &Theme) -> Box<dyn Widget> {
    let hero = Container::new()
        .min_height(560.0)
        .child(
            Image::new("assets/home-hero.jpg")
                .alt("Planta industrial al atardecer")
                .height(560.0)
                .overlay(Color::BLACK.with_alpha(0.55)),
        )
        .child(
            Container::new().padding(48.0).child(
                Column::new()
                    .gap(20.0)
                    .child(
                        Text::new("Ingeniería y Mantenimiento Industrial")
                            .font_size(44.0)
                            .font_weight(FontWeight::Semibold)
                            .color(theme.on_nav)
                            .max_width(720.0)
                            .heading(),
                    )
                    .child(
                        Text::new(
                            "Gestión y operación integral de instalaciones para la \
                             preservación de activos.",
                        )
                        .font_size(20.0)
                        .color(theme.on_nav.with_alpha(0.9))
                        .max_width(620.0),
                    ),
            ),
        );

    let pillars = ["Mantenimiento", "Ingeniería e Infraestructura", "Energía"]
        .iter()
        .enumerate()
        .fold(Column::new().gap(18.0), |column, (i, pillar)| {
            column.child(
                Reveal::new(
                    Text::new(*pillar)
                        .font_size(26.0)
                        .font_weight(FontWeight::Medium)
                        .color(theme.footer),
                )
                .delay(i as f64 * 0.1),
            )
        });

    let intro = Column::new()
        .gap(24.0)
        .child(Reveal::new(
            Text::new(
                "CUARZO 24 S.A ofrece soluciones dirigidas a mejorar la \
                 productividad y la eficiencia de los recursos de nuestros \
                 clientes.",
            )
            .font_size(20.0)
            .color(theme.text)
            .max_width(820.0),
        ))
        .child(pillars);

    Box::new(
        Column::new()
            .gap(48.0)
            .with_test_id("home-page")
            .child(hero)
            .child(Container::new().padding(40.0).max_width(1024.0).child(intro)),
    )
}
