#[cfg(test)]
mod peers_tests {
    use crate::peers::enums::peer_origin::PeerOrigin;
    use crate::peers::structs::peer_book::PeerBook;
    use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;
    use crate::tracker::structs::share_id::ShareId;

    #[test]
    fn test_record_and_find() {
        let book = PeerBook::new();
        assert!(book.is_empty());
        assert!(book.record(ShareId::from("a"), ResolvedPeerAddress::from("1.2.3.4:5"), PeerOrigin::Resolved));

        let peer = book.find_by_share_id(&ShareId::from("a")).unwrap();
        assert_eq!(peer.address.as_str(), "1.2.3.4:5");
        assert_eq!(peer.origin, PeerOrigin::Resolved);
        assert_eq!(book.find_by_address(&ResolvedPeerAddress::from("1.2.3.4:5")).unwrap().share_id, ShareId::from("a"));
        assert!(book.find_by_share_id(&ShareId::from("b")).is_none());
        assert!(book.find_by_address(&ResolvedPeerAddress::from("9.9.9.9:9")).is_none());
    }

    #[test]
    fn test_record_refreshes_existing() {
        let book = PeerBook::new();
        book.record(ShareId::from("a"), ResolvedPeerAddress::from("1.2.3.4:5"), PeerOrigin::Incoming);
        let first_seen = book.find_by_share_id(&ShareId::from("a")).unwrap().last_seen;

        assert!(!book.record(ShareId::from("a"), ResolvedPeerAddress::from("1.2.3.4:6"), PeerOrigin::Resolved));
        let peer = book.find_by_share_id(&ShareId::from("a")).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(peer.address.as_str(), "1.2.3.4:6");
        assert_eq!(peer.origin, PeerOrigin::Resolved);
        assert!(peer.last_seen >= first_seen);
    }

    #[test]
    fn test_list_contains_every_peer() {
        let book = PeerBook::new();
        book.record(ShareId::from("a"), ResolvedPeerAddress::from("1.1.1.1:1"), PeerOrigin::Resolved);
        book.record(ShareId::from("b"), ResolvedPeerAddress::from("2.2.2.2:2"), PeerOrigin::Incoming);
        let listed = book.list();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].last_seen >= listed[1].last_seen);
    }
}
