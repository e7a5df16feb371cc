// SPDX-License-Identifier: MPL-2.0
//! Footer: social links and copyright line.

use super::{link_button, Message};
use crate::content::{PROFILE, SOCIAL_LINKS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let socials = SOCIAL_LINKS.iter().fold(
        Row::new().spacing(spacing::MD),
        |row, link| row.push(link_button(link.kind.label(), Message::OpenLink(link.url.into()))),
    );

    let year = current_year().to_string();
    let copyright = i18n.tr_with_args("footer-copyright", &[("year", &year), ("site", PROFILE.site)]);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(socials)
            .push(Text::new(copyright).size(typography::CAPTION)),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(alignment::Horizontal::Center)
    .into()
}

/// Calendar year in UTC. A clock before 1970 reads as 1970.
fn current_year() -> i64 {
    let days = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() / SECONDS_PER_DAY);
    year_from_days(i64::try_from(days).unwrap_or(i64::MAX / 2))
}

/// Proleptic Gregorian year of the day `days` after 1970-01-01.
fn year_from_days(days: i64) -> i64 {
    // Shift the epoch to 0000-03-01 so leap days end each 400-year era.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let year = year_of_era + era * 400;
    // Month indices 10 and 11 are January and February of the next year.
    if month_index >= 10 {
        year + 1
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_1970() {
        assert_eq!(year_from_days(0), 1970);
        assert_eq!(year_from_days(364), 1970);
        assert_eq!(year_from_days(365), 1971);
    }

    #[test]
    fn handles_leap_years() {
        // 2024-12-31 and 2025-01-01
        assert_eq!(year_from_days(20_088), 2024);
        assert_eq!(year_from_days(20_089), 2025);
        // 2000-02-29
        assert_eq!(year_from_days(11_016), 2000);
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
