#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use rat_quickmodel::model::conversion::datetime_conversion::{DOTNET_EPOCH_OFFSET_TICKS, TICKS_PER_SECOND};
    use rat_quickmodel::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Arc;

    define_model! {
        struct Event {
            name: String,
            created: DateValue,
            updated_at: Option<DateTime<Utc>>,
        }

        fields = {
            name: string_field(),
            created: date_field(),
            updated_at: date_field(),
        }
    }

    fn input(value: serde_json::Value) -> HashMap<String, DataValue> {
        DataValue::from(value).expect_object().expect("测试输入必须是对象")
    }

    fn options(conversion: DateConversionOption, format: DateInputFormat) -> MapOptions {
        MapOptions::builder()
            .date_conversion(conversion)
            .date_input_format(format)
            .build()
            .expect("日期选项构建失败")
    }

    fn new_year_2015() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_epoch_seconds_to_date() {
        println!("🔍 测试纪元秒转换为日期");

        let opts = options(DateConversionOption::ConvertToDate, DateInputFormat::EpochSeconds);
        let event = Event::init_with_options(
            &input(json!({ "created": "1420070400", "updated_at": 1420070400 })),
            &opts,
        )
        .unwrap();

        assert_eq!(event.created, DateValue::DateTime(new_year_2015()));
        assert_eq!(event.updated_at, Some(new_year_2015()));

        println!("✅ 纪元秒测试完成: {:?}", event.created);
    }

    #[test]
    fn test_epoch_seconds_to_timestamp() {
        let opts = options(DateConversionOption::ConvertToTimestamp, DateInputFormat::EpochSeconds);
        let event = Event::init_with_options(&input(json!({ "created": "1420070400.5" })), &opts).unwrap();
        assert_eq!(event.created, DateValue::Timestamp(1420070400.5));
    }

    #[test]
    fn test_dotnet_formats() {
        println!("🔍 测试 .NET 刻度格式");

        let ticks = 1420070400 * TICKS_PER_SECOND + DOTNET_EPOCH_OFFSET_TICKS;

        let simple = options(DateConversionOption::ConvertToDate, DateInputFormat::DotNetSimple);
        let event = Event::init_with_options(&input(json!({ "created": format!("/Date({})/", ticks) })), &simple).unwrap();
        assert_eq!(event.created, DateValue::DateTime(new_year_2015()));

        let zoned = options(DateConversionOption::ConvertToTimestamp, DateInputFormat::DotNetWithTimeZone);
        let event = Event::init_with_options(&input(json!({ "created": format!("{}+0800", ticks) })), &zoned).unwrap();
        assert_eq!(event.created, DateValue::Timestamp((1420070400 + 8 * 3600) as f64));

        println!("✅ .NET 刻度测试完成");
    }

    #[test]
    fn test_pattern_and_formatter() {
        let opts = MapOptions::builder()
            .date_conversion(DateConversionOption::ConvertToDate)
            .date_pattern("%d/%m/%Y")
            .build()
            .unwrap();
        let event = Event::init_with_options(&input(json!({ "created": "01/01/2015" })), &opts).unwrap();
        assert_eq!(event.created, DateValue::DateTime(new_year_2015()));

        let opts = MapOptions::builder()
            .date_conversion(DateConversionOption::ConvertToDate)
            .date_formatter(Arc::new(PatternFormatter::new("%Y%m%d")))
            .build()
            .unwrap();
        let event = Event::init_with_options(&input(json!({ "created": "20150101" })), &opts).unwrap();
        assert_eq!(event.created, DateValue::DateTime(new_year_2015()));
    }

    #[test]
    fn test_leave_as_text_is_byte_identical() {
        println!("🔍 测试保留文本模式");

        let raw = "/Date(1420070400000+0800)/";
        let formats = vec![
            DateInputFormat::EpochSeconds,
            DateInputFormat::DotNetSimple,
            DateInputFormat::DotNetWithTimeZone,
            DateInputFormat::Pattern("%Y".to_string()),
        ];

        for format in formats {
            let opts = options(DateConversionOption::LeaveAsText, format);
            let event = Event::init_with_options(&input(json!({ "created": raw })), &opts).unwrap();
            assert_eq!(event.created, DateValue::Text(raw.to_string()));
        }

        println!("✅ 保留文本测试完成");
    }

    #[test]
    fn test_unparseable_date_is_skipped() {
        let opts = options(DateConversionOption::ConvertToDate, DateInputFormat::EpochSeconds);

        let mut event = Event::default();
        event.updated_at = Some(new_year_2015());
        event
            .update_with_options(&input(json!({ "name": "launch", "updated_at": "next tuesday" })), &opts)
            .unwrap();

        assert_eq!(event.name, "launch");
        assert_eq!(event.updated_at, Some(new_year_2015()));
    }
}
