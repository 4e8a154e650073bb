// MS-DOS date/time words as stored in directory entries

use chrono::{NaiveDate, NaiveDateTime};

/// FAT date: bits 15-9: year (0=1980), bits 8-5: month, bits 4-0: day
/// FAT time: bits 15-11: hours, bits 10-5: minutes, bits 4-0: seconds/2
pub fn fat_datetime(date: u16, time: u16) -> Option<NaiveDateTime> {
    let year = ((date >> 9) & 0x7F) as i32 + 1980;
    let month = ((date >> 5) & 0x0F) as u32;
    let day = (date & 0x1F) as u32;

    let hour = ((time >> 11) & 0x1F) as u32;
    let minute = ((time >> 5) & 0x3F) as u32;
    let second = ((time & 0x1F) * 2) as u32;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}

pub fn format_fat_datetime(date: u16, time: u16) -> Option<String> {
    if date == 0 {
        return None;
    }
    fat_datetime(date, time).map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}
