//! Integration tests for the standalone site sections: placements,
//! internship, contact information, hero slides, and advisors.

use sqlx::PgPool;
use yume_db::models::contact_info::UpsertContactInformation;
use yume_db::models::internship::{CreateInternshipBenefit, CreateInternshipSection};
use yume_db::models::placements::{
    CreateCompanyLogo, CreatePlacementsSection, UpsertManyMoreCompanies,
};
use yume_db::repositories::{
    CompanyLogoRepo, ContactInformationRepo, InternshipBenefitRepo, InternshipSectionRepo,
    ManyMoreCompaniesRepo, PlacementsSectionRepo,
};

fn new_placements_section() -> CreatePlacementsSection {
    CreatePlacementsSection {
        title: Some("Our Placements".to_string()),
        subtitle: None,
        companies_count: Some(50),
        students_placed: Some(500),
        sectors_count: Some(10),
        sort_order: None,
        is_active: None,
    }
}

fn new_internship_section() -> CreateInternshipSection {
    CreateInternshipSection {
        badge_text: None,
        title: "Internship Program".to_string(),
        description: None,
        partner_companies: Some(30),
        job_conversion_rate: Some(85),
        students_placed: Some(200),
        sort_order: None,
        is_active: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn placements_view_formats_counters_and_loads_children(pool: PgPool) {
    let section = PlacementsSectionRepo::create(&pool, &new_placements_section())
        .await
        .unwrap();

    CompanyLogoRepo::create(
        &pool,
        &CreateCompanyLogo {
            section_id: section.id,
            company_name: "Infosys".to_string(),
            logo: None,
            alt_text: None,
            sort_order: None,
            is_active: None,
        },
    )
    .await
    .unwrap();
    // Inactive logos stay off the public view.
    CompanyLogoRepo::create(
        &pool,
        &CreateCompanyLogo {
            section_id: section.id,
            company_name: "Old Partner".to_string(),
            logo: None,
            alt_text: None,
            sort_order: None,
            is_active: Some(false),
        },
    )
    .await
    .unwrap();

    ManyMoreCompaniesRepo::upsert(
        &pool,
        section.id,
        &UpsertManyMoreCompanies {
            additional_count: Some(40),
            label: None,
            is_active: None,
        },
    )
    .await
    .unwrap();

    let views = PlacementsSectionRepo::views_active(&pool).await.unwrap();
    assert_eq!(views.len(), 1);
    let view = &views[0];

    assert_eq!(view.companies_display, "50+");
    assert_eq!(view.students_display, "500+");
    assert_eq!(view.sectors_display, "10+");
    assert_eq!(view.company_logos.len(), 1);
    assert_eq!(view.company_logos[0].company_name, "Infosys");

    let many_more = view.many_more.as_ref().unwrap();
    assert_eq!(many_more.count_display, "+40+");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn many_more_upsert_updates_in_place(pool: PgPool) {
    let section = PlacementsSectionRepo::create(&pool, &new_placements_section())
        .await
        .unwrap();

    let first = ManyMoreCompaniesRepo::upsert(
        &pool,
        section.id,
        &UpsertManyMoreCompanies {
            additional_count: Some(10),
            label: None,
            is_active: None,
        },
    )
    .await
    .unwrap();

    let second = ManyMoreCompaniesRepo::upsert(
        &pool,
        section.id,
        &UpsertManyMoreCompanies {
            additional_count: Some(25),
            label: Some("and counting".to_string()),
            is_active: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.additional_count, 25);
    assert_eq!(second.label, "and counting");

    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM many_more_companies WHERE section_id = $1")
            .bind(section.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn internship_section_is_a_singleton(pool: PgPool) {
    let created = InternshipSectionRepo::create(&pool, &new_internship_section())
        .await
        .unwrap();
    assert!(created.is_some());

    // A second create is refused.
    let refused = InternshipSectionRepo::create(&pool, &new_internship_section())
        .await
        .unwrap();
    assert!(refused.is_none());

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM internship_sections")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn internship_view_formats_counters_and_loads_benefits(pool: PgPool) {
    let section = InternshipSectionRepo::create(&pool, &new_internship_section())
        .await
        .unwrap()
        .unwrap();

    InternshipBenefitRepo::create(
        &pool,
        &CreateInternshipBenefit {
            section_id: section.id,
            title: "Real Projects".to_string(),
            description: None,
            icon: None,
            icon_color: None,
            sort_order: None,
        },
    )
    .await
    .unwrap();

    let view = InternshipSectionRepo::view_active(&pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.partner_companies_display, "30+");
    assert_eq!(view.job_conversion_display, "85%");
    assert_eq!(view.students_placed_display, "200+");
    assert_eq!(view.benefits.len(), 1);
    assert_eq!(view.benefits[0].title, "Real Projects");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_internship_section_is_hidden_from_public_view(pool: PgPool) {
    let mut input = new_internship_section();
    input.is_active = Some(false);
    InternshipSectionRepo::create(&pool, &input).await.unwrap();

    let view = InternshipSectionRepo::view_active(&pool).await.unwrap();
    assert!(view.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_information_upsert_creates_then_replaces(pool: PgPool) {
    assert!(ContactInformationRepo::find(&pool).await.unwrap().is_none());

    let created = ContactInformationRepo::upsert(
        &pool,
        &UpsertContactInformation {
            address: "Bengaluru".to_string(),
            phone: "+91 90000 00000".to_string(),
            email: "hello@yumelearning.com".to_string(),
        },
    )
    .await
    .unwrap();

    let replaced = ContactInformationRepo::upsert(
        &pool,
        &UpsertContactInformation {
            address: "Mysuru".to_string(),
            phone: "+91 90000 00001".to_string(),
            email: "contact@yumelearning.com".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(created.id, replaced.id);
    assert_eq!(replaced.address, "Mysuru");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_information")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}
