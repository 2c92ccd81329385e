//! Integration tests for courses, their child collections, and the
//! curriculum hierarchy.

use sqlx::PgPool;
use yume_db::models::course::{
    CreateCourse, CreateCourseFaq, CreateCourseHighlight, UpdateCourse,
};
use yume_db::models::curriculum::{
    CreateCurriculumMonth, CreateCurriculumSection, CreateCurriculumTopic,
};
use yume_db::repositories::{
    CourseFaqRepo, CourseHighlightRepo, CourseRepo, CurriculumMonthRepo, CurriculumSectionRepo,
    CurriculumTopicRepo,
};

fn new_course(title: &str, url: &str) -> CreateCourse {
    CreateCourse {
        title: title.to_string(),
        card_description: None,
        image: None,
        subtitle: None,
        overview: None,
        duration: None,
        total_hours: None,
        level: None,
        format: None,
        whatsapp_number: None,
        contact_number: None,
        course_url: url.to_string(),
        sort_order: None,
        is_active: None,
    }
}

fn new_highlight(course_id: i64, title: &str) -> CreateCourseHighlight {
    CreateCourseHighlight {
        course_id,
        icon_class: None,
        title: title.to_string(),
        description: None,
        sort_order: None,
        is_active: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_applies_column_defaults(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("Data Analytics", "data-analytics"))
        .await
        .unwrap();

    assert_eq!(course.title, "Data Analytics");
    assert_eq!(course.course_url, "data-analytics");
    assert_eq!(course.card_description, "");
    assert_eq!(course.sort_order, 0);
    assert!(course.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_course_url_is_rejected(pool: PgPool) {
    CourseRepo::create(&pool, &new_course("First", "python"))
        .await
        .unwrap();
    let err = CourseRepo::create(&pool, &new_course("Second", "python"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_courses_course_url"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_active_orders_and_filters(pool: PgPool) {
    let mut second = new_course("Second", "second");
    second.sort_order = Some(2);
    let mut first = new_course("First", "first");
    first.sort_order = Some(1);
    let mut hidden = new_course("Hidden", "hidden");
    hidden.is_active = Some(false);

    CourseRepo::create(&pool, &second).await.unwrap();
    CourseRepo::create(&pool, &first).await.unwrap();
    CourseRepo::create(&pool, &hidden).await.unwrap();

    let active = CourseRepo::list_active(&pool).await.unwrap();
    let titles: Vec<&str> = active.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second"]);

    let all = CourseRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_update_keeps_other_fields(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("SQL Basics", "sql-basics"))
        .await
        .unwrap();

    let patch = UpdateCourse {
        title: None,
        card_description: None,
        image: None,
        subtitle: Some("Hands-on SQL".to_string()),
        overview: None,
        duration: None,
        total_hours: None,
        level: None,
        format: None,
        whatsapp_number: None,
        contact_number: None,
        sort_order: None,
        is_active: Some(false),
    };
    let updated = CourseRepo::update(&pool, course.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "SQL Basics");
    assert_eq!(updated.subtitle, "Hands-on SQL");
    assert!(!updated.is_active);
    // The URL key never changes through update.
    assert_eq!(updated.course_url, "sql-basics");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_cascades_to_children(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("Python", "python"))
        .await
        .unwrap();
    CourseHighlightRepo::create(&pool, &new_highlight(course.id, "Live Classes"))
        .await
        .unwrap();
    CourseFaqRepo::create(
        &pool,
        &CreateCourseFaq {
            course_id: course.id,
            question: "Is it beginner friendly?".to_string(),
            answer: None,
            sort_order: None,
        },
    )
    .await
    .unwrap();

    assert!(CourseRepo::delete(&pool, course.id).await.unwrap());

    let highlights = CourseHighlightRepo::list(&pool, course.id).await.unwrap();
    assert!(highlights.is_empty());
    let faqs = CourseFaqRepo::list(&pool, course.id).await.unwrap();
    assert!(faqs.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn section_and_topic_inherit_course_id(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("Azure", "azure"))
        .await
        .unwrap();
    let month = CurriculumMonthRepo::create(
        &pool,
        &CreateCurriculumMonth {
            course_id: course.id,
            title: "Month 1".to_string(),
            subtitle: None,
            meta_info: None,
            badge_color: None,
            sort_order: None,
            is_active: None,
        },
    )
    .await
    .unwrap();

    // course_id omitted: resolved from the parent month.
    let section = CurriculumSectionRepo::create(
        &pool,
        &CreateCurriculumSection {
            month_id: month.id,
            course_id: None,
            title: "Foundations".to_string(),
            sort_order: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(section.course_id, course.id);

    let topic = CurriculumTopicRepo::create(
        &pool,
        &CreateCurriculumTopic {
            section_id: section.id,
            course_id: None,
            title: "Cloud Concepts".to_string(),
            sort_order: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(topic.course_id, course.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_by_url_assembles_curriculum_tree(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("Excel", "excel"))
        .await
        .unwrap();
    CourseHighlightRepo::create(&pool, &new_highlight(course.id, "Mentor Support"))
        .await
        .unwrap();

    // Inactive highlights stay off the public page.
    let mut hidden = new_highlight(course.id, "Old Highlight");
    hidden.is_active = Some(false);
    CourseHighlightRepo::create(&pool, &hidden).await.unwrap();

    let month = CurriculumMonthRepo::create(
        &pool,
        &CreateCurriculumMonth {
            course_id: course.id,
            title: "Month 1".to_string(),
            subtitle: None,
            meta_info: None,
            badge_color: None,
            sort_order: None,
            is_active: None,
        },
    )
    .await
    .unwrap();
    let section = CurriculumSectionRepo::create(
        &pool,
        &CreateCurriculumSection {
            month_id: month.id,
            course_id: None,
            title: "Formulas".to_string(),
            sort_order: None,
        },
    )
    .await
    .unwrap();
    CurriculumTopicRepo::create(
        &pool,
        &CreateCurriculumTopic {
            section_id: section.id,
            course_id: None,
            title: "XLOOKUP".to_string(),
            sort_order: None,
        },
    )
    .await
    .unwrap();

    let detail = CourseRepo::detail_by_url(&pool, "excel")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(detail.course.id, course.id);
    assert_eq!(detail.highlights.len(), 1);
    assert_eq!(detail.highlights[0].title, "Mentor Support");
    assert_eq!(detail.curriculum.len(), 1);
    assert_eq!(detail.curriculum[0].sections.len(), 1);
    assert_eq!(detail.curriculum[0].sections[0].topics.len(), 1);
    assert_eq!(detail.curriculum[0].sections[0].topics[0].title, "XLOOKUP");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_by_url_ignores_inactive_courses(pool: PgPool) {
    let mut input = new_course("Retired", "retired");
    input.is_active = Some(false);
    CourseRepo::create(&pool, &input).await.unwrap();

    let detail = CourseRepo::detail_by_url(&pool, "retired").await.unwrap();
    assert!(detail.is_none());
}
