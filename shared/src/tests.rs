#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use futures::future::Aborted;
    use time::macros::datetime;
    use crate::error::{ApiError, ErrorCode, ServerError};
    use crate::gate::{Participation, Viewer};
    use crate::models::*;
    use crate::selection::VoteSelection;
    use crate::session::{Session, find_test_user, Role};
    use crate::tally::{percentage, percentages};
    use crate::task::TaskScope;
    use crate::validation::*;
    use crate::vote_section::{Action, Alert, Command, VoteSection, VoteState, DEFAULT_CAST_MESSAGE};

    const PARTICIPANT: Viewer = Viewer { user_id: 7, is_participant: true };
    const OUTSIDER: Viewer = Viewer { user_id: 9, is_participant: false };

    fn response(id: VoteId, closed: bool, voted: Option<OptionId>, options: &[(OptionId, u32)], total: u32) -> VoteResponse {
        VoteResponse {
            vote_id: id,
            title: format!("Vote {id}"),
            is_closed: closed,
            total_participants: total,
            options: options.iter()
                .map(|&(option_id, vote_count)| VoteOptionResponse {
                    option_id,
                    option_value: format!("Option {option_id}"),
                    vote_count,
                })
                .collect(),
            has_voted: voted.is_some(),
            selected_option_id: voted,
        }
    }

    fn vote(id: VoteId, closed: bool, voted: Option<OptionId>) -> Vote {
        Vote::try_from(response(id, closed, voted, &[(id * 10 + 1, 1), (id * 10 + 2, 1)], 2)).unwrap()
    }

    fn loaded_section(viewer: Viewer, votes: Vec<Vote>) -> VoteSection {
        let (mut section, command) = VoteSection::new(3, 1, viewer);
        assert_eq!(command, Command::FetchVotes { host_id: 1, event_id: 3 });
        assert_eq!(section.apply(Action::VotesLoaded(Ok(votes))), None);
        section
    }

    fn capacity(cm: u32, mm: u32, cf: u32, mf: u32) -> Capacity {
        Capacity {
            current_male_participants: cm,
            max_male_participants_count: mm,
            current_female_participants: cf,
            max_female_participants_count: mf,
        }
    }

    // Tally

    #[test]
    fn test_tally_basic() {
        assert_eq!(percentages(&[3, 4, 3], 10), vec![30, 40, 30]);
    }

    #[test]
    fn test_tally_zero_total() {
        assert_eq!(percentages(&[5, 0, 9], 0), vec![0, 0, 0]);
        assert!(percentages(&[], 0).is_empty());
    }

    #[test]
    fn test_tally_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 200), 1);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
    }

    #[test]
    fn test_tally_drift_is_not_corrected() {
        let result = percentages(&[1, 1, 1], 3);
        assert_eq!(result, vec![33, 33, 33]);
        assert_eq!(result.iter().map(|&p| u32::from(p)).sum::<u32>(), 99);
    }

    #[test]
    fn test_tally_against_reported_total() {
        // Abstentions: counts sum to 6 but 10 people took part.
        assert_eq!(percentages(&[4, 2], 10), vec![40, 20]);
        assert_eq!(percentage(5, 3), 100);
    }

    // Vote conversion

    #[test]
    fn test_vote_from_response() {
        let vote = Vote::try_from(response(1, false, Some(2), &[(1, 3), (2, 4), (3, 3)], 10)).unwrap();
        let pcts: Vec<u8> = vote.options.iter().map(|o| o.percentage).collect();
        assert_eq!(pcts, vec![30, 40, 30]);
        assert_eq!(vote.selected_option_id(), Some(2));
        assert!(vote.has_voted());
    }

    #[test]
    fn test_vote_selected_option_must_exist() {
        assert_eq!(
            Vote::try_from(response(4, false, Some(99), &[(1, 0), (2, 0)], 0)),
            Err(VoteDataError::UnknownOption { vote_id: 4, option_id: 99 })
        );

        let mut missing = response(4, false, None, &[(1, 0), (2, 0)], 0);
        missing.has_voted = true;
        assert_eq!(Vote::try_from(missing), Err(VoteDataError::MissingSelection(4)));
    }

    #[test]
    fn test_vote_rejects_duplicate_option_ids() {
        assert!(matches!(
            Vote::try_from(response(4, false, None, &[(1, 0), (1, 0)], 0)),
            Err(VoteDataError::DuplicateOptionId { option_id: 1, .. })
        ));
    }

    #[test]
    fn test_vote_response_json_defaults() {
        let json = r#"[{"voteId":1,"title":"저녁 식사 메뉴","isClosed":false,"totalParticipants":10,
            "options":[{"optionId":4,"optionValue":"흑돼지 구이","voteCount":5},
                       {"optionId":5,"optionValue":"갈치조림","voteCount":3}]}]"#;
        let responses: Vec<VoteResponse> = serde_json::from_str(json).unwrap();
        let votes = votes_from_responses(responses).unwrap();
        assert_eq!(votes[0].status, VoterStatus::NotVoted);
        assert_eq!(votes[0].options[0].percentage, 50);
        assert_eq!(votes[0].options[1].percentage, 30);
    }

    // Gate

    #[test]
    fn test_gate_precedence() {
        for viewer in [PARTICIPANT, OUTSIDER] {
            assert_eq!(Participation::of(&vote(1, true, None), &viewer), Participation::Closed);
            assert_eq!(Participation::of(&vote(1, true, Some(11)), &viewer), Participation::Closed);
            assert_eq!(Participation::of(&vote(1, false, Some(11)), &viewer), Participation::AlreadyVoted);
        }
        assert_eq!(Participation::of(&vote(1, false, None), &OUTSIDER), Participation::ResultsOnly);
        assert_eq!(Participation::of(&vote(1, false, None), &PARTICIPANT), Participation::Selectable);
    }

    #[test]
    fn test_gate_results_visibility() {
        assert!(Participation::Closed.shows_results());
        assert!(Participation::ResultsOnly.shows_results());
        assert!(!Participation::Selectable.shows_results());
    }

    // Selection

    #[test]
    fn test_selection_last_write_wins() {
        let v = Vote::try_from(response(1, false, None, &[(5, 0), (7, 0)], 0)).unwrap();
        let mut selection = VoteSelection::new();
        assert!(selection.select(&v, &PARTICIPANT, 5));
        assert!(selection.select(&v, &PARTICIPANT, 7));
        assert_eq!(selection.current(1), Some(7));
    }

    #[test]
    fn test_selection_noop_when_not_selectable() {
        let mut selection = VoteSelection::new();
        assert!(!selection.select(&vote(1, true, None), &PARTICIPANT, 11));
        assert!(!selection.select(&vote(2, false, Some(21)), &PARTICIPANT, 22));
        assert!(!selection.select(&vote(3, false, None), &OUTSIDER, 31));
        assert!(!selection.select(&vote(4, false, None), &PARTICIPANT, 999));
        assert_eq!(selection, VoteSelection::new());
    }

    #[test]
    fn test_selection_independent_per_vote() {
        let (a, b) = (vote(1, false, None), vote(2, false, None));
        let mut selection = VoteSelection::new();
        selection.select(&a, &PARTICIPANT, 11);
        selection.select(&b, &PARTICIPANT, 22);
        selection.select(&b, &PARTICIPANT, 21);
        assert_eq!(selection.current(1), Some(11));
        assert_eq!(selection.current(2), Some(21));

        selection.clear(2);
        assert_eq!(selection.current(1), Some(11));
        assert_eq!(selection.current(2), None);
    }

    #[test]
    fn test_selection_prune() {
        let mut selection = VoteSelection::new();
        selection.select(&vote(1, false, None), &PARTICIPANT, 11);
        selection.select(&vote(2, false, None), &PARTICIPANT, 21);
        selection.prune(&[vote(1, true, None)], &PARTICIPANT);
        assert_eq!(selection.current(1), None);
        assert_eq!(selection.current(2), None);
    }

    // Vote section

    #[test]
    fn test_section_loading_state() {
        let (section, _) = VoteSection::new(3, 1, PARTICIPANT);
        assert!(section.is_loading());
        assert!(section.votes().is_empty());

        let section = loaded_section(PARTICIPANT, vec![vote(1, false, None), vote(2, true, None)]);
        assert_eq!(section.state_of(1), Some(VoteState::Selectable));
        assert_eq!(section.state_of(2), Some(VoteState::Closed));
        assert_eq!(section.state_of(42), None);
    }

    #[test]
    fn test_section_cast_success_refetches() {
        let mut section = loaded_section(PARTICIPANT, vec![vote(1, false, None)]);
        section.apply(Action::Select { vote_id: 1, option_id: 11 });
        assert_eq!(section.selection().current(1), Some(11));

        let command = section.apply(Action::Cast(1));
        assert_eq!(command, Some(Command::CastVote(CastVoteRequest {
            user_id: 7,
            event_id: 3,
            vote_id: 1,
            option_id: 11,
        })));
        assert_eq!(section.state_of(1), Some(VoteState::Submitting));

        let body: MessageResponse =
            serde_json::from_str(r#"{"message":"투표가 성공적으로 완료되었습니다."}"#).unwrap();
        let command = section.apply(Action::CastCompleted { vote_id: 1, result: Ok(body) });
        assert_eq!(command, Some(Command::FetchVotes { host_id: 1, event_id: 3 }));
        assert_eq!(section.selection().current(1), None);
        assert_eq!(section.state_of(1), Some(VoteState::Loading));
        assert_eq!(section.alert(), Some(&Alert::Success("투표가 성공적으로 완료되었습니다.".into())));
        // Counts stay as last fetched until the refresh lands.
        assert_eq!(section.vote(1).unwrap().options[0].count, 1);

        section.apply(Action::VotesLoaded(Ok(vec![vote(1, false, Some(11))])));
        assert_eq!(section.state_of(1), Some(VoteState::AlreadyVoted));
    }

    #[test]
    fn test_section_cast_success_default_message() {
        let mut section = loaded_section(PARTICIPANT, vec![vote(1, false, None)]);
        section.apply(Action::Select { vote_id: 1, option_id: 12 });
        section.apply(Action::Cast(1));
        section.apply(Action::CastCompleted { vote_id: 1, result: Ok(MessageResponse::default()) });
        assert_eq!(section.alert(), Some(&Alert::Success(DEFAULT_CAST_MESSAGE.into())));
    }

    #[test]
    fn test_section_cast_failure_keeps_selection() {
        let mut section = loaded_section(PARTICIPANT, vec![vote(1, false, None)]);
        section.apply(Action::Select { vote_id: 1, option_id: 12 });
        section.apply(Action::Cast(1));

        let err = ApiError::server(409, "3 개 보다 많은 이벤트에 참여할 수 없습니다");
        let command = section.apply(Action::CastCompleted { vote_id: 1, result: Err(err) });
        assert_eq!(command, None);
        assert_eq!(section.selection().current(1), Some(12));
        assert_eq!(section.state_of(1), Some(VoteState::Selectable));
        assert_eq!(
            section.alert(),
            Some(&Alert::Error(ErrorCode::ParticipationLimitExceeded.to_string()))
        );

        // Retry goes out with the preserved choice.
        assert!(matches!(section.apply(Action::Cast(1)), Some(Command::CastVote(req)) if req.option_id == 12));
    }

    #[test]
    fn test_section_cast_rejected_locally() {
        let mut section = loaded_section(PARTICIPANT, vec![vote(1, false, None), vote(2, true, None)]);
        assert_eq!(section.apply(Action::Cast(1)), None);
        assert!(matches!(section.alert(), Some(Alert::Error(msg)) if msg.contains("Select an option")));
        assert_eq!(section.apply(Action::Cast(2)), None);
        assert_eq!(section.apply(Action::Cast(99)), None);

        let mut outsider = loaded_section(OUTSIDER, vec![vote(1, false, None)]);
        outsider.apply(Action::Select { vote_id: 1, option_id: 11 });
        assert_eq!(outsider.selection().current(1), None);
        assert_eq!(outsider.apply(Action::Cast(1)), None);
        assert!(matches!(outsider.alert(), Some(Alert::Error(msg)) if msg.contains("Only participants")));
    }

    #[test]
    fn test_section_single_cast_in_flight() {
        let mut section = loaded_section(PARTICIPANT, vec![vote(1, false, None), vote(2, false, None)]);
        section.apply(Action::Select { vote_id: 1, option_id: 11 });
        section.apply(Action::Select { vote_id: 2, option_id: 21 });
        assert!(section.apply(Action::Cast(1)).is_some());
        assert_eq!(section.apply(Action::Cast(2)), None);
        assert_eq!(section.apply(Action::CastCompleted { vote_id: 2, result: Ok(MessageResponse::default()) }), None);
        assert!(section.is_submitting());
    }

    #[test]
    fn test_section_refresh_is_deduplicated() {
        let fetch = Command::FetchVotes { host_id: 1, event_id: 3 };
        let (mut section, _) = VoteSection::new(3, 1, PARTICIPANT);
        assert_eq!(section.apply(Action::VotesLoaded(Err(ApiError::Network("offline".into())))), None);
        assert!(!section.is_loading());
        assert!(matches!(section.alert(), Some(Alert::Error(_))));

        assert_eq!(section.apply(Action::Refresh), Some(fetch));
        assert_eq!(section.apply(Action::Refresh), None);
        assert_eq!(section.apply(Action::Refresh), None);
        // Several refreshes during one fetch collapse into a single follow-up.
        assert_eq!(section.apply(Action::VotesLoaded(Ok(Vec::new()))), Some(fetch));
        assert!(section.is_loading());
        assert_eq!(section.apply(Action::VotesLoaded(Ok(vec![vote(1, false, None)]))), None);
        assert!(!section.is_loading());
    }

    #[test]
    fn test_section_refresh_during_fetch_refetches_after_it_lands() {
        let fetch = Command::FetchVotes { host_id: 1, event_id: 3 };
        let mut section = loaded_section(PARTICIPANT, Vec::new());
        assert_eq!(section.apply(Action::Refresh), Some(fetch));
        // A vote is created while that fetch is still in flight.
        assert_eq!(section.apply(Action::Refresh), None);

        assert_eq!(section.apply(Action::VotesLoaded(Ok(Vec::new()))), Some(fetch));
        assert!(section.is_loading());
        assert_eq!(section.apply(Action::VotesLoaded(Ok(vec![vote(4, false, None)]))), None);
        assert_eq!(section.votes().len(), 1);
        assert_eq!(section.state_of(4), Some(VoteState::Selectable));
    }

    #[test]
    fn test_section_viewer_change_clears_selection() {
        let mut section = loaded_section(PARTICIPANT, vec![vote(1, false, None)]);
        section.apply(Action::Select { vote_id: 1, option_id: 11 });
        section.apply(Action::ViewerChanged(Viewer { user_id: 8, is_participant: true }));
        assert_eq!(section.selection().current(1), None);
        assert_eq!(section.viewer().user_id, 8);
    }

    #[test]
    fn test_section_toggle_expanded() {
        let mut section = loaded_section(PARTICIPANT, vec![vote(1, false, None)]);
        section.apply(Action::ToggleExpanded(1));
        assert!(section.is_expanded(1));
        section.apply(Action::ToggleExpanded(1));
        assert!(!section.is_expanded(1));
    }

    // Errors

    #[test]
    fn test_error_known_phrases() {
        let cases = [
            ("이미 참여 중인 이벤트입니다", ErrorCode::AlreadyParticipating),
            ("정원이 가득 찼습니다", ErrorCode::EventFull),
            ("Event is full", ErrorCode::EventFull),
            ("3 개 보다 많은 이벤트에 참여할 수 없습니다", ErrorCode::ParticipationLimitExceeded),
            ("이미 존재하는 이메일입니다", ErrorCode::DuplicateEmail),
        ];
        for (body, code) in cases {
            assert_eq!(ServerError::from_response(409, body).code, Some(code), "{body}");
        }
    }

    #[test]
    fn test_error_json_code_wins() {
        let err = ServerError::from_response(400, r#"{"code":"EVENT_FULL","message":"이미 참여 중"}"#);
        assert_eq!(err.code, Some(ErrorCode::EventFull));
        assert_eq!(err.user_message(), ErrorCode::EventFull.to_string());
    }

    #[test]
    fn test_error_unmatched_shows_raw_message() {
        let err = ApiError::server(500, r#"{"message":"서버 내부 오류"}"#);
        assert_eq!(err.to_string(), "서버 내부 오류");
        assert_eq!(err.code(), None);

        let err = ApiError::server(400, "Bad thing happened");
        assert_eq!(err.to_string(), "Bad thing happened");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_error_empty_body() {
        let err = ServerError::from_response(502, "  ");
        assert_eq!(err.message, "Request failed with status 502");
        assert_eq!(ServerError::from_response(404, "").code, Some(ErrorCode::NotFound));
    }

    // Events

    #[test]
    fn test_event_full() {
        assert!(capacity(8, 8, 8, 8).is_full());
        assert!(!capacity(7, 8, 8, 8).is_full());
        assert!(!capacity(8, 8, 7, 8).is_full());
        assert_eq!(capacity(2, 8, 1, 8).remaining_female(), 7);
    }

    #[test]
    fn test_capacity_seat_counts() {
        let seats = capacity(2, 8, 1, 6);
        assert_eq!(seats.remaining_male(), 6);
        assert_eq!(seats.remaining_female(), 5);
        assert_eq!((seats.total_current(), seats.total_max()), (3, 14));
        // Over-booked groups report zero seats, never wrap.
        assert_eq!(capacity(9, 8, 0, 8).remaining_male(), 0);
    }

    #[test]
    fn test_event_json() {
        let json = r#"{"id":1,"title":"GrewMeet 공식 여름 데이팅","hostname":"GrewMeet Official","hostUserId":1,
            "eventDate":"2025-06-29T18:00:00","location":"서울 한강공원 여의도지구",
            "currentMaleParticipants":2,"maxMaleParticipantsCount":8,
            "currentFemaleParticipants":1,"maxFemaleParticipantsCount":8}"#;
        let event: DatingEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_date, datetime!(2025-06-29 18:00));
        assert_eq!(event.description, None);
        assert!(event.is_hosted_by(1));
        assert_eq!(event.capacity, capacity(2, 8, 1, 8));
    }

    #[test]
    fn test_event_status() {
        let now = datetime!(2025-06-01 12:00);
        assert_eq!(EventStatus::at(datetime!(2025-05-31 12:00), now), EventStatus::Completed);
        assert_eq!(EventStatus::at(datetime!(2025-06-02 11:00), now), EventStatus::Active);
        assert_eq!(EventStatus::at(datetime!(2025-06-05 12:00), now), EventStatus::Upcoming);
    }

    #[test]
    fn test_recommend_skips_full_events() {
        let card = |id, cap| DatingEventCard {
            id,
            title: String::new(),
            hostname: String::new(),
            event_date: datetime!(2025-06-29 18:00),
            location: String::new(),
            capacity: cap,
        };
        let events = [card(1, capacity(8, 8, 8, 8)), card(2, capacity(1, 8, 8, 8)), card(3, capacity(0, 4, 0, 4))];
        assert_eq!(recommend_event(&events, 0.0).map(|e| e.id), Some(2));
        assert_eq!(recommend_event(&events, 0.99).map(|e| e.id), Some(3));
        assert_eq!(recommend_event(&events[..1], 0.5), None);
    }

    // Validation

    #[test]
    fn test_vote_draft_requires_title() {
        let mut draft = VoteDraft::default();
        draft.set_option(0, "A");
        draft.set_option(1, "B");
        assert_eq!(draft.to_request(), Err(ValidationError::TitleRequired));
        draft.title = "   ".into();
        assert_eq!(draft.to_request(), Err(ValidationError::TitleRequired));
    }

    #[test]
    fn test_vote_draft_requires_two_options() {
        let mut draft = VoteDraft::default();
        draft.title = "저녁 메뉴 정하기".into();
        draft.set_option(0, "흑돼지");
        assert_eq!(draft.to_request(), Err(ValidationError::TooFewOptions));
        assert_eq!(ValidationError::TooFewOptions.to_string(), "Enter at least 2 options");
    }

    #[test]
    fn test_vote_draft_caps_options() {
        let mut draft = VoteDraft::default();
        draft.title = "Menu".into();
        while draft.add_option() {}
        assert_eq!(draft.options().len(), MAX_OPTIONS);
        for i in 0..MAX_OPTIONS {
            draft.set_option(i, format!("Option {i}"));
        }
        assert!(!draft.add_option());
        draft.set_option(MAX_OPTIONS, "eleventh");
        assert_eq!(draft.options().len(), MAX_OPTIONS);
        assert_eq!(draft.to_request().unwrap().options.len(), MAX_OPTIONS);
    }

    #[test]
    fn test_vote_draft_remove_floor_and_blanks() {
        let mut draft = VoteDraft::default();
        assert!(!draft.remove_option(0));
        draft.add_option();
        draft.title = " Menu ".into();
        draft.set_option(0, " A ");
        draft.set_option(2, "A");
        let request = draft.to_request().unwrap();
        assert_eq!(request, CreateVoteRequest { title: "Menu".into(), options: vec!["A".into(), "A".into()] });
        assert!(draft.remove_option(1));
        assert_eq!(draft.options().len(), 2);
    }

    #[test]
    fn test_vote_draft_length_limits() {
        let mut draft = VoteDraft::default();
        draft.title = "가".repeat(MAX_TITLE_LENGTH);
        draft.set_option(0, "나".repeat(MAX_OPTION_LENGTH));
        draft.set_option(1, "B");
        assert!(draft.to_request().is_ok());

        draft.set_option(1, "x".repeat(MAX_OPTION_LENGTH + 1));
        assert_eq!(draft.to_request(), Err(ValidationError::OptionTooLong(2)));

        draft.title = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(draft.to_request(), Err(ValidationError::TitleTooLong));
    }

    #[test]
    fn test_event_draft() {
        let now = datetime!(2025-06-01 12:00);
        let mut draft = EventDraft::new(datetime!(2025-06-01 11:00));
        draft.title = "Summer".into();
        assert_eq!(draft.to_request(now), Err(ValidationError::LocationRequired));
        draft.location = "Seoul".into();
        assert_eq!(draft.to_request(now), Err(ValidationError::EventInPast));

        draft.event_date_time = datetime!(2025-06-10 18:00);
        draft.adjust_male(-10);
        draft.adjust_female(20);
        let request = draft.to_request(now).unwrap();
        assert_eq!(request.max_male_participants_count, MIN_PARTICIPANTS);
        assert_eq!(request.max_female_participants_count, MAX_PARTICIPANTS);
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_signup_collects_all_errors() {
        let form = SignupForm {
            name: "김".into(),
            email: "nope".into(),
            phone: String::new(),
            password: "short".into(),
            confirm_password: "other".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::NameTooShort));
        assert_eq!(errors.email, Some(ValidationError::InvalidEmail));
        assert_eq!(errors.phone, Some(ValidationError::PhoneRequired));
        assert_eq!(errors.password, Some(ValidationError::PasswordTooShort));
        assert_eq!(errors.confirm_password, Some(ValidationError::PasswordMismatch));

        let form = SignupForm {
            name: "홍길동".into(),
            email: "hong@example.com".into(),
            phone: "010-0000-0000".into(),
            password: "password1".into(),
            confirm_password: "password1".into(),
        };
        assert_eq!(form.validate().unwrap().email, "hong@example.com");
    }

    #[test]
    fn test_signup_duplicate_email_maps_to_email_field() {
        let taken = ApiError::server(409, "이미 존재하는 이메일입니다.");
        let errors = SignupErrors::from_api_error(&taken).unwrap();
        assert_eq!(errors.email, Some(ValidationError::EmailTaken));
        assert_eq!(errors.name, None);
        assert!(!errors.is_empty());

        let coded = ApiError::server(409, r#"{"code":"DUPLICATE_EMAIL","message":"dup"}"#);
        assert_eq!(SignupErrors::from_api_error(&coded).and_then(|e| e.email), Some(ValidationError::EmailTaken));

        assert_eq!(SignupErrors::from_api_error(&ApiError::server(500, "boom")), None);
        assert_eq!(SignupErrors::from_api_error(&ApiError::Network("offline".into())), None);
    }

    #[test]
    fn test_login_and_find_email() {
        assert_eq!(validate_login("", "x"), Err(ValidationError::EmailRequired));
        assert_eq!(validate_login("a@b.c", ""), Err(ValidationError::PasswordRequired));
        assert!(validate_login(" a@b.c ", "pw").is_ok());
        assert_eq!(validate_find_email("  "), Err(ValidationError::EmailRequired));
    }

    // Session

    #[test]
    fn test_session_lifecycle() {
        let mut session = Session::new();
        assert_eq!(session.user_id(), None);
        assert!(!session.is_host());

        session.set_user(2);
        assert_eq!(session.user_id(), Some(2));
        assert!(session.is_host());

        session.set_user(5);
        assert!(!session.is_host());
        assert_eq!(find_test_user(5).map(|u| u.role), Some(Role::Guest));

        session.clear();
        assert_eq!(session, Session::new());
    }

    // Task scope

    #[test]
    fn test_task_scope_runs_until_cancelled() {
        let mut scope = TaskScope::new();
        assert_eq!(block_on(scope.guard(async { 5 })), Ok(5));

        let pending = scope.guard(async { 6 });
        scope.cancel();
        assert_eq!(block_on(pending), Err(Aborted));
        assert_eq!(block_on(scope.guard(async { 7 })), Err(Aborted));
        assert!(scope.is_cancelled());
    }

    #[test]
    fn test_task_scope_releases_finished_handles() {
        let mut scope = TaskScope::new();
        for i in 0..1000 {
            assert_eq!(block_on(scope.guard(async move { i })), Ok(i));
        }
        assert!(scope.tracked() <= 1);
        assert_eq!(scope.pending(), 0);

        let waiting = scope.guard(async { "in flight" });
        assert_eq!(scope.tracked(), 1);
        assert_eq!(scope.pending(), 1);
        scope.cancel();
        assert_eq!(block_on(waiting), Err(Aborted));
        assert_eq!(scope.tracked(), 0);
    }

    #[test]
    fn test_replaced_scope_drops_stale_response() {
        // One scope per effect run; switching users drops the old one.
        let mut first_user = TaskScope::new();
        let stale = first_user.guard(async { 1 });
        let mut second_user = TaskScope::new();
        let fresh = second_user.guard(async { 2 });
        drop(first_user);
        assert_eq!(block_on(stale), Err(Aborted));
        assert_eq!(block_on(fresh), Ok(2));
    }

    #[test]
    fn test_task_scope_cancels_on_drop() {
        let mut scope = TaskScope::new();
        let pending = scope.guard(async { "late update" });
        drop(scope);
        assert_eq!(block_on(pending), Err(Aborted));
    }
}
