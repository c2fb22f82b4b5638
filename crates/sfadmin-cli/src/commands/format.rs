use crate::config::Config;
use crate::CaseStyle;
use anyhow::Result;
use chrono::{Local, Utc};
use colored::Colorize;
use sfadmin_utils::{
    format_size_units, format_time_at, icon_name_for, param_to_map, parse_time, to_hump, to_line,
    TimeInput,
};

pub fn time(config: &Config, value: &str, format: Option<&str>) -> Result<()> {
    let template = format.unwrap_or(&config.format.time_format);

    match parse_time(Some(TimeInput::from(value)), Some(template))? {
        Some(formatted) => println!("{}", formatted),
        None => println!("{}", "(no time value)".dimmed()),
    }

    Ok(())
}

pub fn ago(config: &Config, value: &str, format: Option<&str>) -> Result<()> {
    let described = format_time_at(
        TimeInput::from(value),
        format,
        Utc::now(),
        &Local,
        config.format.locale,
    )?;
    println!("{}", described);
    Ok(())
}

pub fn query(url: &str) -> Result<()> {
    let params = param_to_map(url)?;

    let mut pairs: Vec<(&String, &String)> = params.iter().collect();
    pairs.sort();

    for (name, value) in pairs {
        println!("{} = {}", name.cyan(), value);
    }

    Ok(())
}

pub fn icon(filename: &str) {
    println!("{}", icon_name_for(filename));
}

pub fn size(config: &Config, bytes: u64, decimals: Option<i32>) {
    let decimals = decimals.unwrap_or(config.format.size_decimals);
    println!("{}", format_size_units(bytes, decimals));
}

pub fn case(style: CaseStyle, name: &str) {
    let converted = match style {
        CaseStyle::Hump => to_hump(name),
        CaseStyle::Line => to_line(name),
    };
    println!("{}", converted);
}
