use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::seed::builtin_records;

fn store() -> DirectoryStore {
	DirectoryStore::seeded()
}

fn recorded(session: &mut BookingSession) -> Rc<RefCell<Vec<BookingEvent>>> {
	let events = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&events);
	session.on_event(move |event: &BookingEvent| sink.borrow_mut().push(event.clone()));
	events
}

#[test]
fn open_select_submit_confirms_and_closes() {
	let store = store();
	let mut session = BookingSession::default();

	session.open(&store, DoctorId(2)).expect("open");
	session.select_slot("Tue 10 AM").expect("select");
	let mut form = BookingForm::new("A", "123");
	let confirmation = session.submit(&mut form).expect("submit");

	assert_eq!(confirmation.doctor_id, DoctorId(2));
	assert_eq!(confirmation.doctor_name, "Dr. Neha Gupta");
	assert_eq!(confirmation.slot, "Tue 10 AM");
	assert_eq!(confirmation.patient, BookingForm::new("A", "123"));
	assert_eq!(session.state(), &BookingState::Closed);
	assert!(form.is_empty(), "form fields are cleared after a booking");
}

#[test]
fn submit_without_slot_keeps_session_open() {
	let store = store();
	let mut session = BookingSession::default();
	session.open(&store, DoctorId(1)).expect("open");

	let mut form = BookingForm::new("A", "123");
	let err = session.submit(&mut form).unwrap_err();

	assert_eq!(err, BookingError::MissingSlotSelection);
	assert!(matches!(session.state(), BookingState::Open { doctor } if doctor.id == DoctorId(1)));
	assert_eq!(form, BookingForm::new("A", "123"));
}

#[test]
fn second_selection_replaces_the_first() {
	let store = store();
	let mut session = BookingSession::default();
	session.open(&store, DoctorId(2)).expect("open");

	session.select_slot("Tue 10 AM").expect("first");
	session.select_slot("Sat 11 AM").expect("second");

	let doctor = session.state().doctor().expect("doctor").clone();
	let selected: Vec<_> = doctor
		.slots
		.iter()
		.filter(|slot| session.is_selected(slot))
		.collect();
	assert_eq!(selected, vec!["Sat 11 AM"]);
}

#[test]
fn reselecting_the_same_slot_is_idempotent() {
	let store = store();
	let mut session = BookingSession::default();
	session.open(&store, DoctorId(2)).expect("open");
	let events = recorded(&mut session);

	session.select_slot("Thu 2 PM").expect("select");
	session.select_slot("Thu 2 PM").expect("reselect");

	assert_eq!(session.state().selected_slot(), Some("Thu 2 PM"));
	assert_eq!(events.borrow().len(), 1);
}

#[test]
fn unknown_id_is_declined_without_leaving_closed() {
	let store = store();
	let mut session = BookingSession::default();
	let events = recorded(&mut session);

	let err = session.open(&store, DoctorId(999)).unwrap_err();

	assert_eq!(err, BookingError::RecordNotFound { id: DoctorId(999) });
	assert_eq!(session.state(), &BookingState::Closed);
	assert_eq!(
		*events.borrow(),
		vec![BookingEvent::OpenDeclined {
			id: DoctorId(999),
			error: err.clone(),
		}]
	);
}

#[test]
fn doctor_without_slots_is_listed_but_not_bookable() {
	let mut records = builtin_records();
	records.push(DoctorRecord::new(3, "Dr. On Leave", "Radiology"));
	let store = DirectoryStore::from_records(records).expect("store");
	let mut session = BookingSession::default();
	session.open(&store, DoctorId(1)).expect("open");
	let events = recorded(&mut session);

	let err = session.open(&store, DoctorId(3)).unwrap_err();

	assert_eq!(
		err,
		BookingError::NotBookable {
			id: DoctorId(3),
			name: "Dr. On Leave".into(),
		}
	);
	assert!(matches!(session.state(), BookingState::Open { doctor } if doctor.id == DoctorId(1)));
	assert!(matches!(
		events.borrow().as_slice(),
		[BookingEvent::OpenDeclined { id, error: BookingError::NotBookable { .. } }] if *id == DoctorId(3)
	));
}

#[test]
fn opening_again_discards_the_previous_selection() {
	let store = store();
	let mut session = BookingSession::default();
	session.open(&store, DoctorId(1)).expect("open");
	session.select_slot("Mon 10:00 AM").expect("select");

	session.open(&store, DoctorId(2)).expect("reopen");

	assert!(matches!(session.state(), BookingState::Open { doctor } if doctor.id == DoctorId(2)));
	assert_eq!(session.state().selected_slot(), None);
}

#[test]
fn slot_from_another_doctor_is_rejected() {
	let store = store();
	let mut session = BookingSession::default();
	session.open(&store, DoctorId(2)).expect("open");

	let err = session.select_slot("Mon 10:00 AM").unwrap_err();

	assert!(matches!(err, BookingError::UnknownSlot { .. }));
	assert!(matches!(session.state(), BookingState::Open { .. }));
}

#[test]
fn actions_without_a_session_are_refused() {
	let mut session = BookingSession::default();
	assert_eq!(
		session.select_slot("Tue 10 AM"),
		Err(BookingError::NoActiveSession)
	);
	assert_eq!(
		session.submit(&mut BookingForm::new("A", "1")),
		Err(BookingError::NoActiveSession)
	);
}

#[test]
fn close_always_returns_to_closed() {
	let store = store();
	let mut session = BookingSession::default();
	session.close();
	assert_eq!(session.state(), &BookingState::Closed);

	session.open(&store, DoctorId(1)).expect("open");
	session.select_slot("Fri 10:30 AM").expect("select");
	let events = recorded(&mut session);
	session.cancel();

	assert_eq!(session.state(), &BookingState::Closed);
	assert_eq!(
		*events.borrow(),
		vec![BookingEvent::Cancelled { doctor: DoctorId(1) }]
	);
}

#[test]
fn observers_see_the_full_lifecycle() {
	let store = store();
	let mut session = BookingSession::default();
	let events = recorded(&mut session);

	session.open(&store, DoctorId(2)).expect("open");
	let _ = session.submit(&mut BookingForm::new("A", "1"));
	session.select_slot("Tue 10 AM").expect("select");
	let confirmation = session
		.submit(&mut BookingForm::new("A", "1"))
		.expect("submit");

	let events = events.borrow();
	assert_eq!(events.len(), 4);
	assert!(matches!(&events[0], BookingEvent::Opened { doctor } if doctor.id == DoctorId(2)));
	assert_eq!(
		events[1],
		BookingEvent::SubmitRejected {
			error: BookingError::MissingSlotSelection
		}
	);
	assert_eq!(
		events[2],
		BookingEvent::SlotSelected {
			doctor: DoctorId(2),
			slot: "Tue 10 AM".into()
		}
	);
	assert_eq!(events[3], BookingEvent::Confirmed(confirmation));
}
