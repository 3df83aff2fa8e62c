// tests/answer_tests.rs

use std::collections::BTreeMap;

use unionmate_core::form::answers::detail_to_answer_state;
use unionmate_core::form::fixed::{resolve_fixed_fields, FixedBinding, FixedField};
use unionmate_core::form::submit::{assemble_answers, normalize_legacy_list};
use unionmate_core::form::validate::required_unanswered_count;
use unionmate_core::models::application::{
    AnswerState, AnswerValue, SelectOptionEntry, SubmittedAnswer,
};
use unionmate_core::models::recruitment::{ItemOption, ItemType, RecruitmentItem};

fn item(id: i64, order: i32, item_type: ItemType, title: &str, required: bool) -> RecruitmentItem {
    RecruitmentItem {
        id,
        order,
        item_type,
        required,
        title: title.to_string(),
        description: String::new(),
        multiple: None,
        options: Vec::new(),
        max_length: None,
        date: None,
        announcement: None,
    }
}

fn select_item(
    id: i64,
    order: i32,
    title: &str,
    multiple: bool,
    options: &[(i64, &str)],
) -> RecruitmentItem {
    let mut it = item(id, order, ItemType::Select, title, false);
    it.multiple = Some(multiple);
    it.options = options
        .iter()
        .enumerate()
        .map(|(index, (option_id, option_title))| ItemOption {
            id: *option_id,
            title: option_title.to_string(),
            order: index as i32 + 1,
            is_etc: false,
            etc_title: None,
        })
        .collect();
    it
}

#[test]
fn select_answer_resolves_by_option_ids_first() {
    // Arrange
    let items = vec![select_item(10, 1, "지원 부서", false, &[(1, "A"), (2, "B")])];
    let answers = vec![SubmittedAnswer {
        recruitment_item_id: Some(10),
        selected_option_ids: Some(vec![2]),
        // A conflicting title list must lose to the id match
        selected_option_titles: Some(vec!["A".to_string()]),
        ..Default::default()
    }];

    // Act
    let state = detail_to_answer_state(&items, Some(&answers));

    // Assert
    assert_eq!(state.get(&10), Some(&AnswerValue::One("2".to_string())));
}

#[test]
fn select_answer_falls_back_to_titles_then_flags() {
    // Arrange
    let items = vec![
        select_item(10, 1, "활동 요일", true, &[(1, "월"), (2, "수"), (3, "금")]),
        select_item(11, 2, "지원 동기", true, &[(4, "친구"), (5, "홍보물")]),
    ];
    let answers = vec![
        // Titles only (trimmed equality)
        SubmittedAnswer {
            recruitment_item_id: Some(10),
            selected_option_titles: Some(vec![" 월 ".to_string(), "금".to_string()]),
            ..Default::default()
        },
        // selectOptions with explicit flags
        SubmittedAnswer {
            recruitment_item_id: Some(11),
            select_options: Some(vec![
                SelectOptionEntry {
                    id: Some(4),
                    selected: Some(false),
                    ..Default::default()
                },
                SelectOptionEntry {
                    id: Some(5),
                    checked: Some(true),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        },
    ];

    // Act
    let state = detail_to_answer_state(&items, Some(&answers));

    // Assert
    assert_eq!(
        state.get(&10),
        Some(&AnswerValue::Many(vec!["1".to_string(), "3".to_string()]))
    );
    assert_eq!(
        state.get(&11),
        Some(&AnswerValue::Many(vec!["5".to_string()]))
    );
}

#[test]
fn flagless_select_options_treat_every_entry_as_selected() {
    // Arrange: legacy responses carry selectOptions without any flag
    let items = vec![select_item(10, 1, "선호 활동", true, &[(1, "봉사"), (2, "축제")])];
    let answers = vec![SubmittedAnswer {
        recruitment_item_id: Some(10),
        select_options: Some(vec![
            SelectOptionEntry {
                id: Some(1),
                ..Default::default()
            },
            SelectOptionEntry {
                title: Some("축제".to_string()),
                ..Default::default()
            },
        ]),
        ..Default::default()
    }];

    // Act
    let state = detail_to_answer_state(&items, Some(&answers));

    // Assert: permissive default, both entries selected
    assert_eq!(
        state.get(&10),
        Some(&AnswerValue::Many(vec!["1".to_string(), "2".to_string()]))
    );
}

#[test]
fn single_select_never_holds_more_than_one_key() {
    // Arrange: a corrupt multi-valued answer against a single-select item
    let items = vec![select_item(10, 1, "부서", false, &[(1, "A"), (2, "B")])];
    let answers = vec![SubmittedAnswer {
        recruitment_item_id: Some(10),
        selected_option_ids: Some(vec![1, 2]),
        ..Default::default()
    }];

    // Act
    let state = detail_to_answer_state(&items, Some(&answers));

    // Assert: normalized down to the first key
    assert_eq!(state.get(&10), Some(&AnswerValue::One("1".to_string())));
}

#[test]
fn answers_match_by_item_id_then_by_order() {
    // Arrange
    let items = vec![
        item(10, 1, ItemType::Text, "자기소개", false),
        item(11, 2, ItemType::Text, "지원 동기", false),
    ];
    let answers = vec![
        SubmittedAnswer {
            recruitment_item_id: Some(10),
            text: Some("id로 매칭".to_string()),
            ..Default::default()
        },
        // Old response shape: no item id, order only
        SubmittedAnswer {
            order: Some(2),
            answer: Some("순서로 매칭".to_string()),
            ..Default::default()
        },
    ];

    // Act
    let state = detail_to_answer_state(&items, Some(&answers));

    // Assert
    assert_eq!(state.get(&10), Some(&AnswerValue::One("id로 매칭".to_string())));
    assert_eq!(state.get(&11), Some(&AnswerValue::One("순서로 매칭".to_string())));
}

#[test]
fn text_answers_follow_the_text_answer_value_priority() {
    // Arrange
    let items = vec![
        item(10, 1, ItemType::Text, "q1", false),
        item(11, 2, ItemType::Text, "q2", false),
        item(12, 3, ItemType::Text, "q3", false),
    ];
    let answers = vec![
        SubmittedAnswer {
            recruitment_item_id: Some(10),
            text: Some("from text".to_string()),
            answer: Some("ignored".to_string()),
            value: Some("ignored".to_string()),
            ..Default::default()
        },
        SubmittedAnswer {
            recruitment_item_id: Some(11),
            answer: Some("from answer".to_string()),
            value: Some("ignored".to_string()),
            ..Default::default()
        },
        SubmittedAnswer {
            recruitment_item_id: Some(12),
            value: Some("from value".to_string()),
            ..Default::default()
        },
    ];

    // Act
    let state = detail_to_answer_state(&items, Some(&answers));

    // Assert
    assert_eq!(state.get(&10), Some(&AnswerValue::One("from text".to_string())));
    assert_eq!(state.get(&11), Some(&AnswerValue::One("from answer".to_string())));
    assert_eq!(state.get(&12), Some(&AnswerValue::One("from value".to_string())));
}

#[test]
fn announcements_never_enter_answer_state() {
    // Arrange
    let mut announcement = item(10, 1, ItemType::Announcement, "공지", true);
    announcement.announcement = Some("읽어주세요".to_string());
    let answers = vec![SubmittedAnswer {
        recruitment_item_id: Some(10),
        text: Some("stray".to_string()),
        ..Default::default()
    }];

    // Act
    let state = detail_to_answer_state(&[announcement], Some(&answers));

    // Assert
    assert!(state.is_empty());
}

#[test]
fn fixed_fields_first_match_consumes() {
    // Arrange: two items both matching "이름"; only the first binds
    let items = vec![
        item(10, 1, ItemType::Text, "이름", true),
        item(11, 2, ItemType::Text, "이름 (한자)", true),
        item(12, 3, ItemType::Text, "이메일 주소", true),
    ];

    // Act
    let bindings = resolve_fixed_fields(&items);

    // Assert
    assert_eq!(
        bindings.get(&FixedField::Name),
        Some(&FixedBinding::Backed { item_id: 10 })
    );
    assert_eq!(
        bindings.get(&FixedField::Email),
        Some(&FixedBinding::Backed { item_id: 12 })
    );
    // No phone item anywhere: synthetic fallback
    assert_eq!(bindings.get(&FixedField::Phone), Some(&FixedBinding::Synthetic));
}

#[test]
fn missing_name_item_validates_against_default_answers() {
    // Arrange: no "이름" item among the returned items
    let items = vec![item(10, 1, ItemType::Text, "자기소개", true)];
    let bindings = resolve_fixed_fields(&items);
    let mut answers = AnswerState::new();
    answers.insert(10, AnswerValue::One("소개글".to_string()));
    let defaults = BTreeMap::new();

    // Act
    let count = required_unanswered_count(&items, &bindings, &answers, &defaults);

    // Assert: name, phone and email are all synthetic and unanswered
    assert_eq!(count, 3);

    // Act again with the defaults filled in
    let mut defaults = BTreeMap::new();
    defaults.insert(FixedField::Name, "홍길동".to_string());
    defaults.insert(FixedField::Phone, "010-1234-5678".to_string());
    defaults.insert(FixedField::Email, "hong@example.com".to_string());
    let count = required_unanswered_count(&items, &bindings, &answers, &defaults);

    // Assert
    assert_eq!(count, 0);
}

#[test]
fn required_text_with_whitespace_only_answer_is_counted() {
    // Arrange: the "소개" scenario
    let items = vec![
        item(10, 1, ItemType::Text, "이름", true),
        item(11, 2, ItemType::Text, "소개", true),
    ];
    let bindings = resolve_fixed_fields(&items);
    let mut answers = AnswerState::new();
    answers.insert(10, AnswerValue::One("홍길동".to_string()));
    answers.insert(11, AnswerValue::One("   ".to_string()));
    let mut defaults = BTreeMap::new();
    defaults.insert(FixedField::Phone, "010-0000-0000".to_string());
    defaults.insert(FixedField::Email, "a@b.c".to_string());

    // Act
    let count = required_unanswered_count(&items, &bindings, &answers, &defaults);

    // Assert: submission must be blocked with exactly this count
    assert_eq!(count, 1);
}

#[test]
fn required_announcement_is_never_counted() {
    // Arrange: required flag set on an announcement, which carries no answer
    let mut announcement = item(10, 1, ItemType::Announcement, "공지", true);
    announcement.announcement = Some("내용".to_string());
    let items = vec![announcement];
    let bindings = BTreeMap::new();
    let answers = AnswerState::new();
    let defaults = BTreeMap::new();

    // Act
    let count = required_unanswered_count(&items, &bindings, &answers, &defaults);

    // Assert
    assert_eq!(count, 0);
}

#[test]
fn assembler_resolves_keys_and_drops_stale_ones() {
    // Arrange
    let items = vec![select_item(10, 1, "부서", true, &[(1, "A"), (2, "B")])];
    let mut answers = AnswerState::new();
    // Key "9" is stale, e.g. the option was removed by a later form edit
    answers.insert(
        10,
        AnswerValue::Many(vec!["2".to_string(), "9".to_string()]),
    );
    let bindings = BTreeMap::new();

    // Act
    let payload = assemble_answers(&items, &answers, &bindings);

    // Assert
    assert_eq!(payload.len(), 1);
    assert_eq!(payload[0].recruitment_item_id, 10);
    assert_eq!(payload[0].option_ids, Some(vec![2]));
}

#[test]
fn assembler_excludes_announcements() {
    // Arrange
    let mut announcement = item(10, 1, ItemType::Announcement, "공지", false);
    announcement.announcement = Some("내용".to_string());
    let items = vec![announcement, item(11, 2, ItemType::Text, "소개", false)];
    let mut answers = AnswerState::new();
    answers.insert(11, AnswerValue::One("안녕하세요".to_string()));
    let bindings = BTreeMap::new();

    // Act
    let payload = assemble_answers(&items, &answers, &bindings);

    // Assert
    assert_eq!(payload.len(), 1);
    assert_eq!(payload[0].recruitment_item_id, 11);
    assert_eq!(payload[0].text.as_deref(), Some("안녕하세요"));
}

#[test]
fn backed_fixed_items_ignore_default_answers() {
    // Arrange: "이름" is backed by a real item but has no answer yet; a
    // default exists for Name anyway
    let items = vec![item(10, 1, ItemType::Text, "이름", true)];
    let bindings = resolve_fixed_fields(&items);
    assert_eq!(
        bindings.get(&FixedField::Name),
        Some(&FixedBinding::Backed { item_id: 10 })
    );
    let answers = AnswerState::new();
    let mut defaults = BTreeMap::new();
    defaults.insert(FixedField::Name, "홍길동".to_string());
    defaults.insert(FixedField::Phone, "010-1234-5678".to_string());
    defaults.insert(FixedField::Email, "hong@example.com".to_string());

    // Act
    let count = required_unanswered_count(&items, &bindings, &answers, &defaults);
    let payload = assemble_answers(&items, &answers, &bindings);

    // Assert: what validation counts as missing, assembly must not fill in
    assert_eq!(count, 1);
    assert_eq!(payload.len(), 1);
    assert_eq!(payload[0].text.as_deref(), Some(""));
}

#[test]
fn legacy_json_array_fixed_values_are_joined() {
    // Arrange / Act / Assert
    assert_eq!(
        normalize_legacy_list(r#"["010-1234-5678","02-123-4567"]"#),
        "010-1234-5678, 02-123-4567"
    );
    // Anything that does not parse passes through untouched
    assert_eq!(normalize_legacy_list("[not json"), "[not json");
    assert_eq!(normalize_legacy_list("평범한 값"), "평범한 값");
}

#[test]
fn mapper_and_assembler_round_trip() {
    // Arrange: SELECT (single and multi), CALENDAR and TEXT items
    let items = vec![
        select_item(10, 1, "부서", false, &[(1, "A"), (2, "B")]),
        select_item(11, 2, "요일", true, &[(3, "월"), (4, "수")]),
        item(12, 3, ItemType::Calendar, "면접 가능일", false),
        item(13, 4, ItemType::Text, "소개", false),
    ];
    let mut state = AnswerState::new();
    state.insert(10, AnswerValue::One("2".to_string()));
    state.insert(
        11,
        AnswerValue::Many(vec!["3".to_string(), "4".to_string()]),
    );
    state.insert(12, AnswerValue::One("2026-03-02".to_string()));
    state.insert(13, AnswerValue::One("안녕하세요".to_string()));
    let bindings = BTreeMap::new();

    // Act: assemble, replay as submitted answers, map back
    let payload = assemble_answers(&items, &state, &bindings);
    let replayed: Vec<SubmittedAnswer> = payload
        .iter()
        .map(|answer| SubmittedAnswer {
            recruitment_item_id: Some(answer.recruitment_item_id),
            text: answer.text.clone(),
            date: answer.date.clone(),
            selected_option_ids: answer.option_ids.clone(),
            ..Default::default()
        })
        .collect();
    let roundtripped = detail_to_answer_state(&items, Some(&replayed));

    // Assert: equivalent answer state
    assert_eq!(roundtripped, state);
}

#[test]
fn select_scenario_ids_to_key_and_back() {
    // Arrange: the documented option-2 scenario
    let items = vec![select_item(10, 1, "부서", false, &[(1, "A"), (2, "B")])];
    let answers = vec![SubmittedAnswer {
        recruitment_item_id: Some(10),
        selected_option_ids: Some(vec![2]),
        ..Default::default()
    }];

    // Act
    let state = detail_to_answer_state(&items, Some(&answers));
    let payload = assemble_answers(&items, &state, &BTreeMap::new());

    // Assert
    assert_eq!(state.get(&10), Some(&AnswerValue::One("2".to_string())));
    assert_eq!(payload[0].option_ids, Some(vec![2]));
}
