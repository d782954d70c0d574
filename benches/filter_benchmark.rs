use criterion::{criterion_group, criterion_main, Criterion};
use eventdesk::models::{AttendanceStatus, Attendee, Event, Role, RsvpFilter, User};
use eventdesk::services::{filter_events, project_events};
use std::hint::black_box;

fn user(id: &str) -> User {
    User {
        object_id: Some(id.to_string()),
        id: None,
        name: format!("User {}", id),
        email: format!("{}@example.com", id),
    }
}

/// A list the size of a busy organizer's dashboard.
fn synthetic_events(count: usize) -> Vec<Event> {
    let statuses = [
        AttendanceStatus::Going,
        AttendanceStatus::Maybe,
        AttendanceStatus::NotGoing,
        AttendanceStatus::Pending,
    ];
    (0..count)
        .map(|i| {
            let organizer = if i % 5 == 0 { "me".to_string() } else { format!("u{}", i % 17) };
            let attendees = (0..20)
                .map(|j| Attendee {
                    user: user(if j == 0 { "me" } else { "guest" }),
                    status: statuses[(i + j) % statuses.len()],
                    role: Role::Attendee,
                    record_id: None,
                })
                .collect();
            Event {
                id: format!("e{}", i),
                title: format!("Event {} {}", i, if i % 3 == 0 { "Workshop" } else { "Meetup" }),
                description: Some("Monthly get-together for the team".to_string()),
                date: format!("2030-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
                time: "18:00".to_string(),
                location: format!("Room {}", i % 9),
                organizer: user(&organizer),
                attendees,
                created_at: None,
                updated_at: None,
            }
        })
        .collect()
}

fn benchmark_project_and_filter(c: &mut Criterion) {
    let raw = synthetic_events(500);
    let projected = project_events(&raw, "me");

    let mut group = c.benchmark_group("event_list");

    group.bench_function("project_500", |b| {
        b.iter(|| project_events(black_box(&raw), black_box("me")))
    });

    group.bench_function("filter_text_and_rsvp", |b| {
        b.iter(|| filter_events(black_box(&projected), "workshop", RsvpFilter::Pending))
    });

    group.bench_function("filter_passthrough", |b| {
        b.iter(|| filter_events(black_box(&projected), "", RsvpFilter::All))
    });

    group.finish();
}

criterion_group!(benches, benchmark_project_and_filter);
criterion_main!(benches);
