//! End-to-end scenario: business setup through first conversion, run against
//! the in-memory store with derived views computed from reloaded collections.

use chrono::Utc;
use memory_store::MemoryStore;
use outreach_core::views::campaigns::{apply, CampaignAction};
use outreach_core::views::dashboard::DashboardStats;
use outreach_core::views::leads::conversion_rate;
use outreach_core::views::lookups::{business_name, lead_name, UNKNOWN_LEAD};
use outreach_core::{
    Appointment, AppointmentRepository, AppointmentStatus, Business, BusinessRepository,
    Campaign, CampaignRepository, CampaignStatus, Interaction, InteractionKind,
    InteractionRepository, InteractionStatus, Lead, LeadRepository, LeadStatus,
};

const USER: &str = "user_acme";

fn acme() -> Business {
    let now = Utc::now();
    Business {
        id: "business_1".to_string(),
        user_id: USER.to_string(),
        name: "Acme".to_string(),
        service_type: "Plumbing".to_string(),
        description: None,
        phone: None,
        email: None,
        created_at: now,
        updated_at: now,
    }
}

fn jane() -> Lead {
    let now = Utc::now();
    Lead {
        id: "lead_1".to_string(),
        user_id: USER.to_string(),
        business_id: "business_1".to_string(),
        name: "Jane Doe".to_string(),
        phone: "+1555".to_string(),
        email: None,
        status: LeadStatus::New,
        source: None,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

fn outreach_campaign() -> Campaign {
    let now = Utc::now();
    Campaign {
        id: "campaign_1".to_string(),
        user_id: USER.to_string(),
        business_id: "business_1".to_string(),
        name: "New Customer Outreach".to_string(),
        script: "Hello from Acme".to_string(),
        status: CampaignStatus::Draft,
        scheduled_at: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_first_conversion_flow() {
    let store = MemoryStore::new();

    BusinessRepository::create(&store, &acme()).await.unwrap();
    LeadRepository::create(&store, &jane()).await.unwrap();
    CampaignRepository::create(&store, &outreach_campaign()).await.unwrap();

    // Start the draft campaign: validate the transition, persist, reload.
    let campaign = CampaignRepository::get(&store, "campaign_1").await.unwrap();
    let next = apply(campaign.status, CampaignAction::Start).unwrap();
    CampaignRepository::set_status(&store, "campaign_1", next).await.unwrap();
    let campaign = CampaignRepository::get(&store, "campaign_1").await.unwrap();
    assert_eq!(campaign.status, CampaignStatus::Active);

    // Log the first call made by the campaign.
    let interaction = Interaction {
        id: "interaction_1".to_string(),
        user_id: USER.to_string(),
        lead_id: "lead_1".to_string(),
        campaign_id: Some("campaign_1".to_string()),
        kind: InteractionKind::Call,
        status: InteractionStatus::Completed,
        content: None,
        response: None,
        duration: Some(120),
        created_at: Utc::now(),
    };
    InteractionRepository::create(&store, &interaction).await.unwrap();

    // Dashboard reloads everything and computes stats.
    let leads = LeadRepository::list_for_user(&store, USER).await.unwrap();
    let campaigns = CampaignRepository::list_for_user(&store, USER).await.unwrap();
    let interactions = InteractionRepository::list_for_user(&store, USER).await.unwrap();

    let stats = DashboardStats::compute(&leads, &campaigns, &interactions);
    assert_eq!(stats.total_leads, 1);
    assert_eq!(stats.active_campaigns, 1);
    assert_eq!(stats.total_interactions, 1);
    assert_eq!(stats.conversion_rate, 0); // Jane not yet converted

    // Jane converts; reload and recompute.
    LeadRepository::set_status(&store, "lead_1", LeadStatus::Converted)
        .await
        .unwrap();
    let leads = LeadRepository::list_for_user(&store, USER).await.unwrap();
    assert_eq!(conversion_rate(&leads), 100);
}

#[tokio::test]
async fn test_appointment_survives_deleted_lead() {
    let store = MemoryStore::new();

    BusinessRepository::create(&store, &acme()).await.unwrap();
    LeadRepository::create(&store, &jane()).await.unwrap();

    let appointment = Appointment {
        id: "appointment_1".to_string(),
        user_id: USER.to_string(),
        lead_id: "lead_1".to_string(),
        business_id: "business_1".to_string(),
        title: "Initial Consultation".to_string(),
        description: None,
        scheduled_at: Utc::now(),
        duration: 60,
        status: AppointmentStatus::Scheduled,
        created_at: Utc::now(),
    };
    AppointmentRepository::create(&store, &appointment).await.unwrap();

    LeadRepository::delete(&store, "lead_1").await.unwrap();

    // The appointment still lists and renders with the lead fallback label.
    let appointments = AppointmentRepository::list_for_user(&store, USER).await.unwrap();
    assert_eq!(appointments.len(), 1);

    let leads = LeadRepository::list_for_user(&store, USER).await.unwrap();
    let businesses = BusinessRepository::list_for_user(&store, USER).await.unwrap();
    assert_eq!(lead_name(&leads, &appointments[0].lead_id), UNKNOWN_LEAD);
    assert_eq!(business_name(&businesses, &appointments[0].business_id), "Acme");
}
