//! Services page: maintenance, engineering, and energy sections.

use crate::theme::Theme;
use cuarzo_core::{widget::FontWeight, Color, Widget};
use cuarzo_widgets::{Column, Container, Image, MetricDisplay, Reveal, Row, Text};

const BENEFICIOS: [&str; 8] = [
    "Un solo interlocutor",
    "Mayor vida útil de las instalaciones",
    "Costo cierto de trabajo",
    "Ahorro en costos de energía",
    "Optimización en la renovación de equipos",
    "Ejecución y dirección técnica de obras de mediana envergadura",
    "Asesoramiento técnico completo y permanente",
    "Acompañamiento en procesos de certificación",
];

const INSTALACIONES: [&str; 9] = [
    "Eléctricas (grupos electrógenos, UPS, señales débiles).",
    "Sanitarias (Red de agua, cloacas, pluviales).",
    "Aire acondicionado.",
    "Gases Medicinales.",
    "Detección y Extinción de incendio.",
    "Redes de vapor.",
    "Ascensores y Montacargas.",
    "Generación de Vacío y Aire Comprimido.",
    "Análisis químicos en red de agua potable.",
];

fn section_title(text: &str, theme: &Theme) -> Text {
    Text::new(text)
        .font_size(32.0)
        .font_weight(FontWeight::Semibold)
        .color(theme.footer)
        .heading()
}

fn paragraph(text: &str, theme: &Theme) -> Text {
    Text::new(text)
        .font_size(18.0)
        .color(theme.text_muted)
        .max_width(820.0)
}

fn bullet_item(text: &str, theme: &Theme, index: usize) -> Reveal {
    Reveal::new(
        Row::new()
            .gap(10.0)
            .child(Text::new("•").font_size(18.0).color(theme.footer))
            .child(
                Text::new(text)
                    .font_size(18.0)
                    .color(theme.text)
                    .max_width(760.0),
            ),
    )
    .offset(16.0)
    .duration(0.4)
    .delay(index as f64 * 0.05)
}

fn hero(source: &str, alt: &str, title: &str, overlay: Color, theme: &Theme) -> Container {
    Container::new()
        .min_height(480.0)
        .child(Image::new(source).alt(alt).height(480.0).overlay(overlay))
        .child(
            Container::new().padding(40.0).child(
                Text::new(title)
                    .font_size(40.0)
                    .font_weight(FontWeight::Semibold)
                    .color(theme.on_nav)
                    .heading(),
            ),
        )
}

/// Build the services page.
#[must_use]
pub fn build(theme: &Theme) -> Box<dyn Widget> {
    let mantenimiento = Column::new()
        .gap(16.0)
        .child(Reveal::new(section_title("Mantenimiento", theme)))
        .child(Reveal::new(paragraph(
            "CUARZO 24 S.A realiza la gestión y operación integral de las \
             instalaciones para la preservación de activos, ofrecemos soluciones \
             de Ingeniería y Mantenimiento dirigidas a mejorar la productividad y \
             la eficiencia de los recursos de nuestros clientes.",
            theme,
        )).delay(0.1))
        .child(Reveal::new(paragraph(
            "Nuestro servicio comprende desde la gestión, la operación, el \
             mantenimiento predictivo, preventivo y correctivo de las \
             instalaciones técnicas. Ofrecemos, además, la Garantía Total: \
             incluyendo la totalidad de la mano de obra, insumos y repuestos \
             necesarios para prestar el servicio. También garantizamos \
             resultados, a través de la implementación de indicadores de Calidad \
             y Disponibilidad para cada servicio del contrato.",
            theme,
        )).delay(0.15));

    let beneficios = BENEFICIOS
        .iter()
        .enumerate()
        .fold(Column::new().gap(14.0), |column, (i, item)| {
            column.child(bullet_item(item, theme, i))
        });

    let ingenieria = Column::new()
        .gap(16.0)
        .child(Reveal::new(section_title("Ingeniería e Infraestructura", theme)))
        .child(Reveal::new(paragraph(
            "Brindamos la ejecución de Proyectos, Dirección y Conducción \
             Técnica, cálculos y dimensionado, y Montaje de Instalaciones \
             Especiales:",
            theme,
        )).delay(0.1));

    let instalaciones = INSTALACIONES
        .iter()
        .enumerate()
        .fold(Column::new().gap(8.0), |column, (i, item)| {
            column.child(bullet_item(item, theme, i))
        });

    let planes = Column::new()
        .gap(6.0)
        .child(Reveal::new(paragraph(
            "Relevamiento y confección de pliegos para desarrollo de planes de \
             remodelación y refuncionalización interno.",
            theme,
        )))
        .child(Reveal::new(paragraph("Planes de pintura.", theme)).delay(0.05))
        .child(Reveal::new(paragraph("Planes de Optimización de Superficies.", theme)).delay(0.1));

    let energia = Column::new()
        .gap(16.0)
        .child(Reveal::new(section_title("Energía", theme)))
        .child(Reveal::new(paragraph(
            "Gestión integral y operación de infraestructura energética, \
             incluyendo la evaluación de desempeño, eficiencia y \
             sustentabilidad. Desarrollo e implementación de tableros de \
             control para el análisis de vectores energéticos, con el objetivo \
             de optimizar el uso de recursos, identificar oportunidades de \
             mejora continua y facilitar la toma de decisiones.",
            theme,
        )).delay(0.1))
        .child(
            MetricDisplay::new(100.0, "Respeto al medio ambiente")
                .delay(0.2)
                .value_color(theme.footer)
                .fill_color(theme.accent)
                .track_color(theme.accent.with_alpha(0.3))
                .label_color(theme.footer)
                .with_test_id("energy-metric"),
        );

    Box::new(
        Column::new()
            .gap(48.0)
            .with_test_id("servicios-page")
            .child(hero(
                "assets/servicios-1.jpg",
                "Equipo técnico configurando maquinaria industrial",
                "Mantenimiento",
                Color::BLACK.with_alpha(0.6),
                theme,
            ))
            .child(Container::new().padding(40.0).max_width(1024.0).child(
                Column::new().gap(32.0).child(mantenimiento).child(beneficios),
            ))
            .child(hero(
                "assets/servicios-2.jpg",
                "Equipo técnico revisando planos de obra",
                "Ingeniería e Infraestructura",
                Color::BLACK.with_alpha(0.4),
                theme,
            ))
            .child(Container::new().padding(40.0).max_width(1024.0).child(
                Column::new()
                    .gap(32.0)
                    .child(ingenieria)
                    .child(instalaciones)
                    .child(planes),
            ))
            .child(hero(
                "assets/servicios-3.jpg",
                "Instalación de paneles solares en obra",
                "Energía",
                Color::BLACK.with_alpha(0.35),
                theme,
            ))
            .child(Container::new().padding(40.0).max_width(1024.0).child(energia)),
    )
}
