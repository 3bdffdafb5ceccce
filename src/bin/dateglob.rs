use std::env;

use chrono::NaiveDate;

fn main() {
    let mut args = env::args().skip(1);

    let (Some(template), Some(start), Some(end)) = (args.next(), args.next(), args.next()) else {
        panic!("Usage: ./dateglob <TEMPLATE> <START> <END>");
    };

    let start: NaiveDate = start.parse().expect("invalid start date");
    let end: NaiveDate = end.parse().expect("invalid end date");
    let dates = start.iter_days().take_while(|day| *day <= end);

    match date_glob::strftime(dates, &template) {
        Ok(globs) => {
            for glob in globs {
                println!("{glob}");
            }
        }
        Err(err) => {
            panic!("{err}");
        }
    }
}
