//! Subcommand bodies: run a query and print it as plain text.

use anyhow::{anyhow, Result};
use tracing::debug;
use wp_lunar::{
    next_observance_day_from_now, upcoming_festivals_from_now, FestivalCountdown, HolidayRecord,
    LunarCalendar, LunarObservation, PhaseReading,
};
use wp_time::{Date, DateTime, Month};

use crate::cli::{DayArgs, HolidaysArgs, MonthArgs, PhaseArgs};

pub fn phase(args: PhaseArgs) -> Result<()> {
    let at = match args.at {
        Some(at) => at,
        None => DateTime::now()?,
    };
    let reading = LunarCalendar::standard().classify_moon_phase(at);
    println!("{at}  {}", phase_line(&reading));
    Ok(())
}

pub fn month(args: MonthArgs) -> Result<()> {
    let month = Month::from_number(args.month)
        .ok_or_else(|| anyhow!("month {} out of range [1, 12]", args.month))?;
    let days = LunarCalendar::standard().resolve_observance_days(args.year, month)?;
    debug!(year = args.year, %month, count = days.len(), "resolved month");

    println!(
        "Wan Phra days, {month} {} ({} {})",
        args.year,
        month.thai_name(),
        i32::from(args.year) + wp_time::BUDDHIST_ERA_OFFSET
    );
    if days.is_empty() {
        println!("  none on record");
    }
    for day in &days {
        println!("  {}", observance_line(day));
    }
    Ok(())
}

pub fn holidays(args: HolidaysArgs) -> Result<()> {
    let holidays = LunarCalendar::standard().lookup_holidays(args.year);
    if holidays.is_empty() {
        println!("No holidays on record for {}.", args.year);
        return Ok(());
    }
    println!("Thai holidays, {}", args.year);
    for holiday in &holidays {
        println!("  {}", holiday_line(holiday));
    }
    Ok(())
}

pub fn festivals() -> Result<()> {
    let list = upcoming_festivals_from_now()?;
    if list.is_empty() {
        println!("No upcoming festivals on record.");
    }
    for countdown in &list {
        println!("{}", countdown_line(countdown));
    }
    Ok(())
}

pub fn next() -> Result<()> {
    match next_observance_day_from_now()? {
        Some(next) => println!(
            "{}  in {} day{}",
            observance_line(&next.observation),
            next.days_remaining,
            if next.days_remaining == 1 { "" } else { "s" }
        ),
        None => println!("No Wan Phra day on record in the next three months."),
    }
    Ok(())
}

pub fn day(args: DayArgs) -> Result<()> {
    let calendar = LunarCalendar::standard();
    let date = args.date;
    let info = calendar.day_info(date);

    println!(
        "{date}, {} (B.E. {})",
        date.weekday(),
        date.buddhist_era_year()
    );
    println!("  moon: {}", phase_line(&calendar.classify_moon_phase(date)));
    if let Some(observance) = &info.observance {
        println!("  {}", observance_line(observance));
    }
    if let Some(holiday) = &info.local_holiday {
        println!("  {}", holiday_line(holiday));
    }
    if let Some(holiday) = &info.overlay_holiday {
        println!("  {} (US)", holiday.name);
    }
    if info.is_ordinary() {
        println!("  no observance or holiday");
    }
    Ok(())
}

// ── Formatting ────────────────────────────────────────────────────────────────

fn short_date(date: Date) -> String {
    format!(
        "{:>2} {} {}",
        date.day_of_month(),
        date.month().short_name(),
        date.year()
    )
}

fn phase_line(reading: &PhaseReading) -> String {
    format!(
        "{} ({}), day {} of the cycle",
        reading.phase,
        reading.phase.thai_name(),
        reading.day_in_cycle
    )
}

fn observance_line(o: &LunarObservation) -> String {
    format!(
        "{}  {}  ({})",
        short_date(o.date),
        o.label,
        o.english_label
    )
}

fn holiday_line(h: &HolidayRecord) -> String {
    format!(
        "{}  {} ({}) [{}]",
        short_date(h.date),
        h.name,
        h.localized_name,
        h.category
    )
}

fn countdown_line(c: &FestivalCountdown) -> String {
    let (months, days) = c.months_and_days();
    format!(
        "{} ({})  {}  in {} days ({months} months, {days} days)",
        c.name,
        c.localized_name,
        short_date(c.date),
        c.days_remaining
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp_lunar::{lookup_holidays, resolve_observance_days, upcoming_festivals};

    #[test]
    fn observance_line_shows_date_and_labels() {
        let january = resolve_observance_days(2024, Month::January).unwrap();
        assert_eq!(
            observance_line(&january[0]),
            "18 Jan 2024  วันพระ ขึ้น ๘ ค่ำ  (Wan Phra, 8th waxing day)"
        );
    }

    #[test]
    fn countdown_line_splits_months() {
        let list = upcoming_festivals(Date::from_ymd(2024, 1, 1).unwrap());
        let line = countdown_line(&list[0]);
        assert!(line.starts_with("Songkran ("));
        assert!(line.ends_with("in 103 days (3 months, 13 days)"));
    }

    #[test]
    fn holiday_line_carries_category() {
        let holidays = lookup_holidays(2024);
        assert_eq!(
            holiday_line(&holidays[0]),
            format!(" 1 Jan 2024  New Year's Day ({}) [public]", holidays[0].localized_name)
        );
    }
}
