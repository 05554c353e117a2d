#[cfg(test)]
mod tests {
    use rat_quickmodel::*;
    use serde_json::json;
    use std::collections::HashMap;

    define_model! {
        /// 用户
        struct User {
            id: i64,
            name: String,
            score: f64,
            active: bool,
        }

        fields = {
            id: integer_field(),
            name: string_field(),
            score: float_field(),
            active: boolean_field(),
        }
    }

    define_model! {
        struct Legacy {
            _foo: String,
            #[allow(non_snake_case)]
            Kind: String,
        }

        fields = {
            _foo: string_field(),
            Kind: string_field(),
        }
    }

    define_model! {
        struct Tag {
            label: String,
        }

        fields = {
            label: string_field(),
        }
    }

    define_model! {
        struct Author {
            name: String,
        }

        fields = {
            name: string_field(),
        }
    }

    define_model! {
        struct Post {
            title: String,
            author: Option<Author>,
            tags: Vec<Tag>,
            keywords: Vec<String>,
            extra: serde_json::Value,
        }

        fields = {
            title: string_field(),
            author: object_field::<Author>(),
            tags: array_field(None),
            keywords: array_field(Some(field_types!(text))),
            extra: json_field(),
        }
    }

    define_model! {
        struct Address {
            city: String,
        }

        fields = {
            city: string_field(),
        }
    }

    define_model! {
        struct Writer {
            name: String,
            address: Option<Address>,
        }

        fields = {
            name: string_field(),
            address: object_field::<Address>(),
        }
    }

    define_model! {
        struct Book {
            title: String,
            writer: Option<Writer>,
        }

        fields = {
            title: string_field(),
            writer: object_field::<Writer>(),
        }
    }

    fn input(value: serde_json::Value) -> HashMap<String, DataValue> {
        DataValue::from(value).expect_object().expect("测试输入必须是对象")
    }

    #[test]
    fn test_construct_from_mapping() {
        println!("🔍 测试从映射构造模型");

        let user = User::init_with(&input(json!({ "id": 5, "name": "Ann" }))).unwrap();
        assert_eq!(user.id, 5);
        assert_eq!(user.name, "Ann");
        // 缺失字段保持零值
        assert_eq!(user.score, 0.0);
        assert!(!user.active);

        println!("✅ 构造测试完成: {:?}", user);
    }

    #[test]
    fn test_loose_values_are_coerced() {
        println!("🔍 测试松散类型转换");

        let user = User::init_with(&input(json!({
            "id": "42",
            "name": 1001,
            "score": "0.5",
            "active": "yes"
        })))
        .unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(user.name, "1001");
        assert_eq!(user.score, 0.5);
        assert!(user.active);

        // 转换不了的值不写入
        let user = User::init_with(&input(json!({ "id": "abc", "active": "maybe" }))).unwrap();
        assert_eq!(user.id, 0);
        assert!(!user.active);

        println!("✅ 松散类型转换测试完成");
    }

    #[test]
    fn test_update_keeps_missing_fields() {
        println!("🔍 测试更新时缺失字段保持不变");

        let mut user = User::default();
        user.update_with(&input(json!({ "name": "Bob" }))).unwrap();
        user.update_with(&input(json!({}))).unwrap();
        assert_eq!(user.name, "Bob");

        // null 和 NaN 视为缺失
        user.score = 3.5;
        user.update_with(&input(json!({ "name": null, "score": "NaN" }))).unwrap();
        assert_eq!(user.name, "Bob");
        assert_eq!(user.score, 3.5);

        let mut nan_input = HashMap::new();
        nan_input.insert("score".to_string(), DataValue::Float(f64::NAN));
        user.update_with(&nan_input).unwrap();
        assert_eq!(user.score, 3.5);

        println!("✅ 更新测试完成");
    }

    #[test]
    fn test_update_is_chainable() {
        let mut user = User::default();
        user.update_with(&input(json!({ "id": 1 })))
            .unwrap()
            .update_with(&input(json!({ "name": "Cy" })))
            .unwrap();
        assert_eq!((user.id, user.name.as_str()), (1, "Cy"));
    }

    #[test]
    fn test_object_with_none_gives_default() {
        println!("🔍 测试空输入返回默认实例");

        let user = User::object_with(None).unwrap();
        assert_eq!(user, User::default());

        let map = input(json!({ "id": 9 }));
        let user = User::object_with(Some(&map)).unwrap();
        assert_eq!(user.id, 9);

        println!("✅ 空输入测试完成");
    }

    #[test]
    fn test_key_normalization() {
        println!("🔍 测试键名规范化");

        // _foo 没有精确键时匹配 foo；Kind 匹配 kind
        let legacy = Legacy::init_with(&input(json!({ "foo": "bar", "kind": "x" }))).unwrap();
        assert_eq!(legacy._foo, "bar");
        assert_eq!(legacy.Kind, "x");

        // 精确键优先
        let legacy = Legacy::init_with(&input(json!({ "_foo": "exact", "foo": "stripped" }))).unwrap();
        assert_eq!(legacy._foo, "exact");

        println!("✅ 键名规范化测试完成");
    }

    #[test]
    fn test_table_entry_takes_precedence() {
        println!("🔍 测试键映射表优先");

        let options = MapOptions::with_key_mapping(KeyMappingTable::new().rename("name", "login"));

        let user = User::init_with_options(&input(json!({ "name": "ignored", "login": "ann" })), &options).unwrap();
        assert_eq!(user.name, "ann");

        // 映射表指定的键不存在时不回落到规范化匹配
        let user = User::init_with_options(&input(json!({ "name": "ignored" })), &options).unwrap();
        assert_eq!(user.name, "");

        println!("✅ 键映射表测试完成");
    }

    #[test]
    fn test_nested_object_and_arrays() {
        println!("🔍 测试嵌套模型和数组");

        let options = MapOptions::with_key_mapping(KeyMappingTable::new().nested::<Tag>("tags", "tags"));
        let post = Post::init_with_options(
            &input(json!({
                "title": "hello",
                "author": { "name": "Ann" },
                "tags": [{ "label": "a" }, { "label": "b" }, "not an object"],
                "keywords": ["rust", 7, null],
                "extra": { "views": 10 }
            })),
            &options,
        )
        .unwrap();

        assert_eq!(post.title, "hello");
        assert_eq!(post.author, Some(Author { name: "Ann".to_string() }));
        assert_eq!(
            post.tags,
            vec![Tag { label: "a".to_string() }, Tag { label: "b".to_string() }]
        );
        // 声明了元素类型：数字转文本，null 丢弃
        assert_eq!(post.keywords, vec!["rust".to_string(), "7".to_string()]);
        assert_eq!(post.extra, json!({ "views": 10 }));

        println!("✅ 嵌套测试完成: {:?}", post);
    }

    #[test]
    fn test_nested_object_wrong_shape_is_skipped() {
        let post = Post::init_with(&input(json!({ "author": "Ann", "title": "t" }))).unwrap();
        assert_eq!(post.author, None);
        assert_eq!(post.title, "t");
    }

    #[test]
    fn test_scoped_table_for_nested_type() {
        println!("🔍 测试嵌套类型的子映射表");

        let table = KeyMappingTable::new()
            .rename("title", "headline")
            .scope::<Author>(KeyMappingTable::new().rename("name", "full_name"));
        let options = MapOptions::with_key_mapping(table);

        let post = Post::init_with_options(
            &input(json!({
                "headline": "news",
                "author": { "full_name": "Ann Lee", "name": "ignored" }
            })),
            &options,
        )
        .unwrap();

        assert_eq!(post.title, "news");
        assert_eq!(post.author.map(|a| a.name), Some("Ann Lee".to_string()));

        println!("✅ 子映射表测试完成");
    }

    #[test]
    fn test_root_scopes_reach_deeper_types() {
        println!("🔍 测试根映射表的子表作用于多层嵌套");

        let table = KeyMappingTable::new()
            .scope::<Writer>(KeyMappingTable::new().rename("name", "full_name"))
            .scope::<Address>(KeyMappingTable::new().rename("city", "town"));
        let options = MapOptions::with_key_mapping(table);

        let book = Book::init_with_options(
            &input(json!({
                "title": "Fjords",
                "writer": {
                    "full_name": "Ann",
                    "address": { "town": "Oslo", "city": "wrong" }
                }
            })),
            &options,
        )
        .unwrap();

        let writer = book.writer.unwrap();
        assert_eq!(writer.name, "Ann");
        assert_eq!(writer.address.map(|a| a.city), Some("Oslo".to_string()));

        // 当前子表里的同类型子表优先于根表
        let table = KeyMappingTable::new()
            .scope::<Writer>(
                KeyMappingTable::new()
                    .scope::<Address>(KeyMappingTable::new().rename("city", "place")),
            )
            .scope::<Address>(KeyMappingTable::new().rename("city", "town"));
        let options = MapOptions::with_key_mapping(table);

        let book = Book::init_with_options(
            &input(json!({ "writer": { "address": { "town": "Oslo", "place": "Bergen" } } })),
            &options,
        )
        .unwrap();
        assert_eq!(
            book.writer.and_then(|w| w.address).map(|a| a.city),
            Some("Bergen".to_string())
        );

        println!("✅ 多层子表测试完成");
    }

    #[test]
    fn test_nested_array_without_element_type_keeps_value() {
        println!("🔍 测试未声明元素类型的嵌套数组不覆盖原值");

        let options = MapOptions::with_key_mapping(KeyMappingTable::new().nested::<Tag>("tags", "tags"));
        let mut post = Post::init_with_options(&input(json!({ "tags": [{ "label": "a" }] })), &options).unwrap();
        assert_eq!(post.tags.len(), 1);

        // 默认选项下没有元素类型，对象元素无法写入 Vec<Tag>，字段保持不变
        post.update_with(&input(json!({ "tags": [{ "label": "b" }] }))).unwrap();
        assert_eq!(post.tags, vec![Tag { label: "a".to_string() }]);

        // 空数组照常写入
        post.update_with(&input(json!({ "tags": [] }))).unwrap();
        assert!(post.tags.is_empty());

        println!("✅ 嵌套数组保持原值测试完成");
    }

    #[test]
    fn test_from_json_str() {
        let user = User::from_json_str(r#"{"id": 3, "name": "Dee"}"#, &MapOptions::default()).unwrap();
        assert_eq!(user.id, 3);

        // 顶层不是对象时返回默认实例
        let user = User::from_json_str("[1, 2]", &MapOptions::default()).unwrap();
        assert_eq!(user, User::default());

        assert!(User::from_json_str("{ broken", &MapOptions::default()).is_err());
    }

    #[test]
    fn test_metadata_is_cached() {
        let first = model::registry::meta_of::<User>();
        let second = model::registry::meta_of::<User>();
        assert!(std::sync::Arc::ptr_eq(&first, &second));
        assert_eq!(first.field_names(), vec!["id", "name", "score", "active"]);
        assert!(model::registry::is_cached::<User>());
    }
}
