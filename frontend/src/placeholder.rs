//! Stand-in data shown when the development backend is unreachable.

use time::macros::datetime;
use shared::*;

fn capacity(cm: u32, mm: u32, cf: u32, mf: u32) -> Capacity {
    Capacity {
        current_male_participants: cm,
        max_male_participants_count: mm,
        current_female_participants: cf,
        max_female_participants_count: mf,
    }
}

pub fn events() -> Vec<DatingEventCard> {
    vec![
        DatingEventCard {
            id: 1,
            title: "GrewMeet 공식 여름 데이팅".into(),
            hostname: "GrewMeet Official".into(),
            event_date: datetime!(2025-06-29 18:00),
            location: "서울 한강공원 여의도지구".into(),
            capacity: capacity(2, 8, 1, 8),
        },
        DatingEventCard {
            id: 2,
            title: "책과 함께하는 저녁".into(),
            hostname: "책벌레들".into(),
            event_date: datetime!(2025-07-05 19:00),
            location: "서울 성수동 북카페".into(),
            capacity: capacity(4, 4, 4, 4),
        },
    ]
}

pub fn event(event_id: EventId) -> DatingEvent {
    DatingEvent {
        id: event_id,
        title: "GrewMeet 공식 여름 데이팅".into(),
        hostname: "GrewMeet Official".into(),
        host_user_id: Some(1),
        description: Some("한강에서 즐기는 시원한 여름밤! 치맥과 보드게임, 그리고 불꽃놀이까지!".into()),
        event_date: datetime!(2025-06-29 18:00),
        location: "서울 한강공원 여의도지구".into(),
        capacity: capacity(2, 8, 1, 8),
    }
}

fn vote(id: VoteId, title: &str, closed: bool, voted: Option<OptionId>, options: &[(OptionId, &str, u32)]) -> VoteResponse {
    VoteResponse {
        vote_id: id,
        title: title.into(),
        is_closed: closed,
        total_participants: 10,
        options: options.iter()
            .map(|&(option_id, value, vote_count)| VoteOptionResponse {
                option_id,
                option_value: value.into(),
                vote_count,
            })
            .collect(),
        has_voted: voted.is_some(),
        selected_option_id: voted,
    }
}

pub fn votes() -> Vec<Vote> {
    let responses = vec![
        vote(1, "오름 트레킹 코스 선택", false, None,
            &[(1, "성산일출봉", 3), (2, "한라산 영실코스", 4), (3, "사려니숲길", 3)]),
        vote(2, "저녁 식사 메뉴", false, Some(5),
            &[(4, "흑돼지 구이", 5), (5, "갈치조림", 3), (6, "해물탕", 2)]),
        vote(3, "치킨 브랜드 선택", true, Some(7),
            &[(7, "BBQ", 6), (8, "교촌치킨", 3), (9, "BHC", 1)]),
    ];
    votes_from_responses(responses).unwrap_or_default()
}
